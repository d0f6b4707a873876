use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use crate::app::env::Envy;

pub mod app;
pub mod sprites;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub envy: Arc<Envy>,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            http: reqwest::Client::new(),
            envy: Arc::new(envy),
        }
    }
}
