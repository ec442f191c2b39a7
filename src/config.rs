use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        Ok(Config {
            service_host,
            service_port,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
