//! API types for the relay endpoints

use serde::{Deserialize, Serialize};

// --------------
// | Api Routes |
// --------------

/// The route to relay a swap instruction to the agent
///
/// The route name is kept from the original shell-script relay so the
/// existing browser client continues to work unchanged
pub const RUN_SCRIPT_ROUTE: &str = "run-script";
/// The route to relay a deposit instruction to the agent
pub const DEPOSIT_ROUTE: &str = "deposit";
/// The route to relay a withdrawal instruction to the agent
pub const WITHDRAW_ROUTE: &str = "withdraw";

// -------------
// | Constants |
// -------------

/// The error message returned when an amount fails validation
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount provided";
/// The error message returned when a token identifier is empty
pub const ERR_INVALID_TOKEN: &str = "Invalid token provided";

// -------------
// | Api Types |
// -------------

/// The request body for a deposit
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepositRequest {
    /// The amount of USDC to deposit
    pub amount: f64,
}

/// The request body for a withdrawal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithdrawRequest {
    /// The amount of USDC to withdraw
    pub amount: f64,
}

/// The request body for a swap relayed via the run-script endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunScriptRequest {
    /// The amount of the source token to trade
    pub amount: f64,
    /// The token to trade out of
    pub from_token: String,
    /// The token to trade into
    pub to_token: String,
}

/// The response to a deposit or withdrawal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayMessageResponse {
    /// A human readable status message
    pub message: String,
}

/// The response to a run-script request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunScriptResponse {
    /// A human readable status message
    pub message: String,
    /// The agent's raw response text
    pub agent_response: String,
}

/// The error response body shared by all endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayErrorResponse {
    /// The error message
    pub error: String,
}

// --------------
// | Validation |
// --------------

/// Validate a user supplied amount
///
/// Amounts must be finite and strictly positive; this check is shared
/// by every relay endpoint
pub fn validate_amount(amount: f64) -> Result<(), String> {
    if amount.is_finite() && amount > 0. {
        Ok(())
    } else {
        Err(ERR_INVALID_AMOUNT.to_string())
    }
}

/// Validate a user supplied token identifier
pub fn validate_token(token: &str) -> Result<(), String> {
    if token.trim().is_empty() {
        Err(ERR_INVALID_TOKEN.to_string())
    } else {
        Ok(())
    }
}
