//! # Domain Layer
//!
//! Entities, value objects and the rules that govern ownership and offers.
//! Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;
