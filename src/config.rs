use anyhow::{Context, Result};

/// Service configuration, read once at startup.
#[derive(Debug)]
pub struct ServiceConfig {
    pub model_path: String,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let model_path = std::env::var("MODEL_PATH").context("MODEL_PATH not set")?;
        let port = match std::env::var("PORT") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("invalid PORT value {:?}", s))?,
            Err(_) => 8080,
        };

        Ok(Self { model_path, port })
    }
}
