//! Shared types and models for the FloraWatch platform
//!
//! This crate contains the flowering-condition evaluator and the types shared
//! between the backend, browser clients (via WASM), and other components.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
