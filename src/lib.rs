//! money_transfer - validated transfer between two in-memory accounts
//!
//! # Modules
//!
//! - [`account`] - Single-balance account holder
//! - [`transfer`] - TransferService and its error taxonomy
//! - [`scenario`] - CSV-driven transfer scenarios
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod config;
pub mod logging;
pub mod scenario;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::Account;
pub use transfer::{TransferError, TransferService};
