pub mod config;
pub mod logging;

pub mod encode;
pub mod html;
pub mod link;
pub mod phone;
