//! Error types for course-setup

use thiserror::Error;

/// Main error type for course-setup operations
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("External tool failed: {0}")]
    ExternalTool(String),

    #[error("External network not found: {0}")]
    NetworkNotFound(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CourseError {
    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Create a crypto error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }
}
