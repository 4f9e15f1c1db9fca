//! Route definitions for the vault relay server

use std::sync::Arc;

use tracing::error;
use vault_relay_api::{
    relay::{
        DepositRequest, RelayErrorResponse, RunScriptRequest, WithdrawRequest, DEPOSIT_ROUTE,
        RUN_SCRIPT_ROUTE, WITHDRAW_ROUTE,
    },
    vaults::GET_VAULTS_ROUTE,
    PING_ROUTE,
};
use warp::{http::StatusCode, Filter};

use crate::{
    error::ApiError,
    handlers::{
        relay::{deposit_handler, run_script_handler, withdraw_handler},
        vaults::get_vaults_handler,
    },
    middleware::{identity, with_json_body},
    server::Server,
};

/// Build the full route tree for the relay
pub fn build_routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // GET /ping
    let ping = warp::get()
        .and(warp::path(PING_ROUTE))
        .map(|| warp::reply::with_status("PONG", StatusCode::OK));

    // --- Relay --- //

    let run_script = warp::post()
        .and(warp::path(RUN_SCRIPT_ROUTE))
        .and(warp::body::bytes())
        .map(with_json_body::<RunScriptRequest>)
        .and_then(identity)
        .and(with_server(server.clone()))
        .and_then(run_script_handler);

    let deposit = warp::post()
        .and(warp::path(DEPOSIT_ROUTE))
        .and(warp::body::bytes())
        .map(with_json_body::<DepositRequest>)
        .and_then(identity)
        .and(with_server(server.clone()))
        .and_then(deposit_handler);

    let withdraw = warp::post()
        .and(warp::path(WITHDRAW_ROUTE))
        .and(warp::body::bytes())
        .map(with_json_body::<WithdrawRequest>)
        .and_then(identity)
        .and(with_server(server.clone()))
        .and_then(withdraw_handler);

    // --- Vaults --- //

    let get_vaults = warp::get()
        .and(warp::path(GET_VAULTS_ROUTE))
        .and(with_server(server))
        .and_then(get_vaults_handler);

    ping.or(run_script).or(deposit).or(withdraw).or(get_vaults).recover(handle_rejection)
}

// -----------
// | Helpers |
// -----------

/// Handle a rejection from an endpoint handler
async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, warp::Rejection> {
    if let Some(api_error) = err.find::<ApiError>() {
        let (code, message) = match api_error {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::AgentUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        error!("API Error: {:?}", api_error);

        let body = warp::reply::json(&RelayErrorResponse { error: message.clone() });
        Ok(warp::reply::with_status(body, code))
    } else {
        error!("Unhandled rejection: {:?}", err);
        Err(err)
    }
}

/// Helper function to clone and pass the server to filters
fn with_server(
    server: Arc<Server>,
) -> impl Filter<Extract = (Arc<Server>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || server.clone())
}
