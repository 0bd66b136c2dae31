//! Public runtime API surface.
//!
//! Gathers the types exposed to consumers of the runtime crate so other
//! layers can stay focused on oracles, repositories, or round generation.

pub mod errors;

pub use errors::{Result, RoundFailure, RuntimeError};
