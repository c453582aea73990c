//! Core business logic for Tabsplit.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Split validation, payer assignment, and expense submission
//! - `receipt` - Extracted receipt data and the transient receipt artifact
//! - `remote` - The remote expense-ledger capability contract

pub mod expense;
pub mod receipt;
pub mod remote;
