//! The API for the vault relay
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod instruction;
mod types;
pub use types::*;
