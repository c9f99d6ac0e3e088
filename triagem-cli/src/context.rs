use std::path::Path;
use triagem::config::ConfigLoader;
use triagem::prelude::*;

pub struct TriagemCliContext {
    pub engine: TriagemEngine,
}

impl TriagemCliContext {
    /// Load configuration from the default files, an explicit file and the
    /// environment, in that order of precedence (later wins).
    pub fn new(config_path: Option<&Path>) -> triagem::Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.load_default_files();

        if let Some(path) = config_path {
            loader.load_file(path)?;
        }

        loader.load_env();
        let config = loader.extract()?;

        tracing::debug!(?config_path, "configuration loaded");

        Ok(Self {
            engine: TriagemEngine::new(config),
        })
    }

    pub fn from_config(config: TriagemConfig) -> Self {
        Self {
            engine: TriagemEngine::new(config),
        }
    }
}
