use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::AnalysisError;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub service_name: String,
    pub log_level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "marketmood".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.log_level.trim().is_empty() {
            return Err(AnalysisError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Install a console subscriber for the consuming application.
///
/// The engine itself only emits `tracing` events; whether and how they are
/// rendered is up to the binary that embeds it.
pub fn init_logging(config: LoggingConfig) -> Result<(), AnalysisError> {
    config.validate()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AnalysisError::Config(format!("failed to install subscriber: {}", e)))?;

    tracing::info!("logging initialized for {}", config.service_name);
    Ok(())
}
