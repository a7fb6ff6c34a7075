//! # API Layer
//!
//! External interfaces to the transfer market.
//!
//! - [`rest`]: axum JSON endpoints

pub mod rest;
