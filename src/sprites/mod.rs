pub mod apis;
pub mod catalog;
pub mod models;
pub mod service;

pub static OUTPUT_DIR: &str = "assets";
pub static REQUEST_DELAY_MILLIS: u64 = 2000;
pub static RESPONSE_EXCERPT_CHARS: usize = 120;
