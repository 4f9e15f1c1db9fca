//! A typed client for the downstream agent process
//!
//! The agent accepts a single natural-language prompt over local HTTP and
//! replies with free text. This crate owns that wire format and applies a
//! request timeout, so a hung agent bounds the caller's wait instead of
//! suspending it indefinitely.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]
#![deny(clippy::needless_pass_by_ref_mut)]

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::AgentClientError;

pub mod error;

// -------------
// | Constants |
// -------------

/// The route on which the agent accepts prompts
pub const SEND_PROMPT_ROUTE: &str = "/send_prompt";
/// The default base URL of the agent process
pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:6000";
/// Default timeout for requests to the agent
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ---------
// | Types |
// ---------

/// The configuration options for the agent client
#[derive(Debug, Clone)]
pub struct AgentClientConfig {
    /// The base URL of the agent process
    pub base_url: String,
    /// The timeout applied to each prompt request
    pub timeout: Duration,
}

impl Default for AgentClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AGENT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The request body accepted by the agent
#[derive(Debug, Serialize)]
struct SendPromptRequest<'a> {
    /// The natural-language prompt for the agent to act on
    prompt: &'a str,
}

// ---------------------
// | Client Definition |
// ---------------------

/// A client for the agent process
#[derive(Debug, Clone)]
pub struct AgentClient {
    /// The base URL of the agent
    base_url: String,
    /// The shared HTTP client used for issuing requests to the agent
    http_client: Client,
}

impl AgentClient {
    /// Create a new client from the given config
    pub fn new(config: AgentClientConfig) -> Result<Self, AgentClientError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AgentClientError::setup)?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { base_url, http_client })
    }

    /// Send a prompt to the agent, returning its raw text response
    ///
    /// Non-2xx responses and transport failures (connection refused,
    /// timeout) both surface as errors; the agent's own text is carried
    /// in the error message where available
    pub async fn send_prompt(&self, prompt: &str) -> Result<String, AgentClientError> {
        let url = format!("{}{}", self.base_url, SEND_PROMPT_ROUTE);
        let response = self
            .http_client
            .post(&url)
            .json(&SendPromptRequest { prompt })
            .send()
            .await
            .map_err(AgentClientError::http)?;

        let status = response.status();
        let body = response.text().await.map_err(AgentClientError::parsing)?;
        if !status.is_success() {
            return Err(AgentClientError::agent(format!("Status {}: {}", status, body)));
        }

        debug!("agent replied with {} bytes", body.len());
        Ok(body)
    }
}
