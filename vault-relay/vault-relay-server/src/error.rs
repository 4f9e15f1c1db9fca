//! Error types for the vault relay server

use std::{error::Error, fmt::Display};

use agent_client::error::AgentClientError;
use warp::reject::Reject;

/// The error type emitted by the relay server
#[derive(Debug, Clone)]
pub enum RelayServerError {
    /// An error reaching or executing against the agent process
    Agent(String),
    /// A miscellaneous error
    Custom(String),
}

#[allow(clippy::needless_pass_by_value)]
impl RelayServerError {
    /// Create an agent error
    pub fn agent<T: ToString>(msg: T) -> RelayServerError {
        RelayServerError::Agent(msg.to_string())
    }

    /// Create a custom error
    pub fn custom<T: ToString>(msg: T) -> RelayServerError {
        RelayServerError::Custom(msg.to_string())
    }
}

impl Display for RelayServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayServerError::Agent(e) => write!(f, "Agent error: {}", e),
            RelayServerError::Custom(e) => write!(f, "Uncategorized error: {}", e),
        }
    }
}
impl Error for RelayServerError {}
impl Reject for RelayServerError {}

impl From<AgentClientError> for RelayServerError {
    fn from(error: AgentClientError) -> Self {
        RelayServerError::Agent(error.to_string())
    }
}

/// API-specific error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request error
    BadRequest(String),
    /// The agent call failed or the agent was unreachable
    AgentUnavailable(String),
    /// Internal server error
    InternalError(String),
}

impl Reject for ApiError {}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(e) => write!(f, "Bad request: {}", e),
            ApiError::AgentUnavailable(e) => write!(f, "Agent unavailable: {}", e),
            ApiError::InternalError(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl Error for ApiError {}

impl From<RelayServerError> for ApiError {
    fn from(error: RelayServerError) -> Self {
        match error {
            RelayServerError::Agent(e) => ApiError::AgentUnavailable(e),
            RelayServerError::Custom(e) => ApiError::InternalError(e),
        }
    }
}
