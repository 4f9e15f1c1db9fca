//! Handlers for the vault catalog endpoints

use std::sync::Arc;

use vault_relay_api::vaults::GetVaultsResponse;
use warp::reply::Json;

use crate::server::Server;

/// Handler for fetching the vault catalog
///
/// Serves the static listing data the front-end renders; vault
/// selection stays client-side and triggers no further calls here
pub(crate) async fn get_vaults_handler(server: Arc<Server>) -> Result<Json, warp::Rejection> {
    let resp = GetVaultsResponse { vaults: server.vaults.clone() };
    Ok(warp::reply::json(&resp))
}
