use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<regex::Error> for AnalysisError {
    fn from(value: regex::Error) -> Self {
        AnalysisError::Config(format!("invalid lexicon term pattern: {}", value))
    }
}

impl From<String> for AnalysisError {
    fn from(value: String) -> Self {
        AnalysisError::Validation(value)
    }
}
