//! Primer - arithmetic, strings, iteration, and randomness in one run
//!
//! This crate re-exports all layers of the Primer workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: primer_runtime    - Driver, run configuration, CLI
//! Layer 1: primer_ops        - Arithmetic, collection, string, accumulator, random
//! Layer 0: primer_foundation - Core types (Value, Type, Error, OrderedMap)
//! ```

pub use primer_foundation as foundation;
pub use primer_ops as ops;
pub use primer_runtime as runtime;
