//! Defines the server which encapsulates all dependencies for relay
//! execution

use agent_client::{AgentClient, AgentClientConfig};
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::info;
use vault_relay_api::{instruction::Instruction, vaults::VaultMetadata};

use crate::{error::RelayServerError, Cli};

/// The server
pub struct Server {
    /// The client for the downstream agent process
    agent_client: AgentClient,
    /// The static vault catalog served to the front-end
    pub vaults: Vec<VaultMetadata>,
    /// Bounds the number of in-flight agent calls; excess requests queue
    /// here rather than stampeding the agent
    permits: Semaphore,
}

impl Server {
    /// Build a server from the CLI
    pub fn build_from_cli(args: Cli) -> Result<Self, RelayServerError> {
        let config = AgentClientConfig {
            base_url: args.agent_url,
            timeout: Duration::from_secs(args.agent_timeout_secs),
        };
        let agent_client = AgentClient::new(config).map_err(RelayServerError::from)?;
        Ok(Self::new(agent_client, args.max_concurrent_agent_calls))
    }

    /// Create a new server from its parts
    pub fn new(agent_client: AgentClient, max_concurrent_agent_calls: usize) -> Self {
        Self {
            agent_client,
            vaults: default_vaults(),
            permits: Semaphore::new(max_concurrent_agent_calls),
        }
    }

    /// Forward an instruction to the agent, returning its raw reply
    ///
    /// No retries and no deduplication: a repeated call is a brand-new
    /// instruction to the agent
    pub async fn dispatch(&self, instruction: &Instruction) -> Result<String, RelayServerError> {
        let _permit = self.permits.acquire().await.map_err(RelayServerError::custom)?;

        let prompt = instruction.to_prompt();
        info!("dispatching instruction to agent: {prompt}");
        self.agent_client.send_prompt(&prompt).await.map_err(RelayServerError::from)
    }
}

/// The static vault catalog rendered by the front-end's vault cards
fn default_vaults() -> Vec<VaultMetadata> {
    vec![
        VaultMetadata {
            name: "sUSDA Pool".to_string(),
            listed: "24 Apr 2025 (74 days)".to_string(),
            apy: 30.54,
            liquidity: "7.01M".to_string(),
            accent_color: "purple".to_string(),
        },
        VaultMetadata {
            name: "scrvUSD Pool".to_string(),
            listed: "26 Jun 2025 (137 days)".to_string(),
            apy: 29.7,
            liquidity: "115,253".to_string(),
            accent_color: "yellow".to_string(),
        },
        VaultMetadata {
            name: "syrupUSDC Pool".to_string(),
            listed: "24 Apr 2025 (74 days)".to_string(),
            apy: 21.64,
            liquidity: "12.51M".to_string(),
            accent_color: "orange".to_string(),
        },
    ]
}
