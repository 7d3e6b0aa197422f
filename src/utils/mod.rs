//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`extract_domain`] - Domain label extraction for usage metrics
//! - [`redirect_target`] - Redirect target resolution and `Location` encoding

pub mod code_generator;
pub mod extract_domain;
pub mod redirect_target;
