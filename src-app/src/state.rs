//! Application state
use waymark_core::{Config, Result, Router};

use crate::routes::app_routes;

pub struct AppState {
    config: Config,
    router: Router,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let router = Router::new(app_routes()?, &config)?;
        Ok(Self { config, router })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
