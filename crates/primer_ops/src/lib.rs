//! Operations for Primer.
//!
//! Functions are organized by category:
//! - [`math`] - Checked integer addition and multiplication
//! - [`collection`] - Sequence transforms
//! - [`string`] - String manipulation
//! - [`accumulate`] - Two-pass numeric accumulators
//! - [`random`] - Seedable pseudo-random integers
//! - [`native`] - The same operations over [`Value`](primer_foundation::Value) arguments,
//!   looked up by name

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accumulate;
pub mod collection;
pub mod math;
pub mod native;
pub mod random;
pub mod string;

pub use accumulate::{alternating_calc, complex_calc};
pub use collection::double_all;
pub use math::{add, multiply};
pub use native::{NativeFn, call, lookup};
pub use random::RandomSource;
pub use string::reverse;
