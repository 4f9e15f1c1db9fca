//! Handlers for the relay endpoints

use std::sync::Arc;

use vault_relay_api::{
    instruction::Instruction,
    relay::{
        validate_amount, validate_token, DepositRequest, RelayMessageResponse, RunScriptRequest,
        RunScriptResponse, WithdrawRequest,
    },
};
use warp::reply::Json;

use crate::{error::ApiError, server::Server};

// -------------
// | Constants |
// -------------

/// The message returned on a successful deposit dispatch
pub(crate) const DEPOSIT_SUCCESS_MESSAGE: &str = "Deposit instruction executed successfully";
/// The message returned on a successful withdrawal dispatch
pub(crate) const WITHDRAW_SUCCESS_MESSAGE: &str = "Withdraw instruction executed successfully";
/// The message returned on a successful swap dispatch
pub(crate) const RUN_SCRIPT_SUCCESS_MESSAGE: &str = "Swap instruction executed successfully";

// ------------
// | Handlers |
// ------------

/// Handler for depositing USDC into the vault
///
/// The agent's reply is intentionally not returned here, only a fixed
/// success message
pub(crate) async fn deposit_handler(
    req: DepositRequest,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    validate_amount(req.amount).map_err(|e| warp::reject::custom(ApiError::BadRequest(e)))?;

    let instruction = Instruction::Deposit { amount: req.amount };
    server
        .dispatch(&instruction)
        .await
        .map_err(|e| warp::reject::custom(ApiError::from(e)))?;

    let resp = RelayMessageResponse { message: DEPOSIT_SUCCESS_MESSAGE.to_string() };
    Ok(warp::reply::json(&resp))
}

/// Handler for withdrawing USDC from the vault
pub(crate) async fn withdraw_handler(
    req: WithdrawRequest,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    validate_amount(req.amount).map_err(|e| warp::reject::custom(ApiError::BadRequest(e)))?;

    let instruction = Instruction::Withdraw { amount: req.amount };
    server
        .dispatch(&instruction)
        .await
        .map_err(|e| warp::reject::custom(ApiError::from(e)))?;

    let resp = RelayMessageResponse { message: WITHDRAW_SUCCESS_MESSAGE.to_string() };
    Ok(warp::reply::json(&resp))
}

/// Handler for relaying a swap instruction to the agent
///
/// Unlike deposit and withdraw, the agent's raw reply is forwarded to
/// the caller so the front-end can render it
pub(crate) async fn run_script_handler(
    req: RunScriptRequest,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    validate_amount(req.amount).map_err(|e| warp::reject::custom(ApiError::BadRequest(e)))?;
    validate_token(&req.from_token).map_err(|e| warp::reject::custom(ApiError::BadRequest(e)))?;
    validate_token(&req.to_token).map_err(|e| warp::reject::custom(ApiError::BadRequest(e)))?;

    let instruction = Instruction::Swap {
        amount: req.amount,
        from_token: req.from_token,
        to_token: req.to_token,
    };
    let agent_response = server
        .dispatch(&instruction)
        .await
        .map_err(|e| warp::reject::custom(ApiError::from(e)))?;

    let resp = RunScriptResponse {
        message: RUN_SCRIPT_SUCCESS_MESSAGE.to_string(),
        agent_response,
    };
    Ok(warp::reply::json(&resp))
}
