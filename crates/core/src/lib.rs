//! `depot-core` — shared error taxonomy for the back office domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;

pub use error::{ErrorKind, Fault, PortError, PortResult};
