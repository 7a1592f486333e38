//! Core values, errors, and ordered collections for Primer.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type printed by the driver
//! - [`Type`] - Type descriptors used in type-mismatch errors
//! - [`Error`] - Rich error types with context
//! - Collections ([`PrimerVec`], [`OrderedMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{OrderedMap, PrimerVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::Type;
pub use value::Value;

/// Result type alias using the Primer error type.
pub type Result<T> = std::result::Result<T, Error>;
