//! # Infrastructure Layer
//!
//! Adapters behind the application ports.
//!
//! - [`persistence`]: in-memory and PostgreSQL market stores
//! - [`config`]: settings loading and tracing setup for the binary

pub mod config;
pub mod persistence;
