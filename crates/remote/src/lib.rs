//! HTTP client for the remote expense ledger.
//!
//! This crate owns transport details only: request serialization, auth
//! headers, timeouts, HTTP error mapping, and JSON decoding into the domain
//! types defined by `tabsplit-core`.

pub mod client;
pub mod dto;

pub use client::LedgerHttpClient;
