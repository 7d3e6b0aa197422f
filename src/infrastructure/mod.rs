//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - Process-local storage backends

pub mod persistence;
