//! Handlers for the vault relay server

pub mod relay;
pub mod vaults;
