//! Error types for the agent client

use thiserror::Error;

/// Error type for agent client operations
#[derive(Debug, Error, Clone)]
pub enum AgentClientError {
    /// Setup error
    #[error("Setup error: {0}")]
    Setup(String),

    /// Parsing error
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),

    /// An error reported by the agent itself
    #[error("Agent error: {0}")]
    Agent(String),
}

#[allow(clippy::needless_pass_by_value)]
impl AgentClientError {
    /// Create a new setup error
    pub fn setup<T: ToString>(msg: T) -> Self {
        Self::Setup(msg.to_string())
    }

    /// Create a new parsing error
    pub fn parsing<T: ToString>(msg: T) -> Self {
        Self::Parsing(msg.to_string())
    }

    /// Create a new HTTP error
    pub fn http<T: ToString>(msg: T) -> Self {
        Self::Http(msg.to_string())
    }

    /// Create a new agent error
    pub fn agent<T: ToString>(msg: T) -> Self {
        Self::Agent(msg.to_string())
    }
}
