//! API types for the vault catalog

use serde::{Deserialize, Serialize};

// --------------
// | Api Routes |
// --------------

/// The route to fetch the vault catalog
pub const GET_VAULTS_ROUTE: &str = "vaults";

// -------------
// | Api Types |
// -------------

/// A display record for a single vault
///
/// These are static listing data for the front-end's vault cards;
/// nothing here is read from chain or mutated by the relay
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultMetadata {
    /// The display name of the vault
    pub name: String,
    /// The listing date shown on the vault card
    pub listed: String,
    /// The annual yield percentage
    pub apy: f64,
    /// The formatted liquidity figure
    pub liquidity: String,
    /// The accent color used by the vault card
    pub accent_color: String,
}

/// The response containing the vault catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetVaultsResponse {
    /// The vaults available for deposit
    pub vaults: Vec<VaultMetadata>,
}
