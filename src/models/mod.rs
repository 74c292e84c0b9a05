//! Data models representing database entities.

/// Account entity and request payload
pub mod account;
