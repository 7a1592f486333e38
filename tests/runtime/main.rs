//! Integration tests for Layer 2: Runtime
//!
//! End-to-end runs of the driver and command-line parsing.

mod end_to_end;
