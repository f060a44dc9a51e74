use std::sync::Arc;

use crate::config::Config;
use crate::runner::{ModelRunner, OllamaRunner};

/// Shared, immutable per-process state. Requests share nothing mutable; each
/// one drives its own model-runner process through the runner handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub runner: Arc<dyn ModelRunner>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let runner = Arc::new(OllamaRunner::new(config.runner_config.clone()));
        Self { config, runner }
    }

    #[cfg(test)]
    pub fn with_runner(config: Config, runner: Arc<dyn ModelRunner>) -> Self {
        Self { config, runner }
    }
}
