//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code derivation, generation and validation

pub mod code_generator;
