//! # Storage Module
//!
//! - `models`: the `Account` record
//! - `accounts`: the `AccountStore` abstraction and its in-memory implementation

pub mod accounts;
pub mod models;
