//! API types for the vault relay

pub mod relay;
pub mod vaults;

/// The ping route
pub const PING_ROUTE: &str = "ping";
