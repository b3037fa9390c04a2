//! Domain error model.
//!
//! Every domain crate defines its own error enum with structured variants
//! (the offending identifiers and values travel with the error); this module
//! only fixes the *kinds* those errors fall into and the opaque wrapper for
//! collaborator failures. Transport mapping (HTTP status codes, payload
//! shapes) belongs to the API layer.

use thiserror::Error;

/// Classification of a domain failure, independent of transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced entity does not exist.
    NotFound,
    /// Structurally or semantically invalid request data.
    InvalidInput,
    /// Well-formed request that the current entity state cannot accept.
    Unprocessable,
    /// Request violates a cardinality or uniqueness invariant.
    Conflict,
    /// A collaborator (store, catalog, gateway) failed; not a domain outcome.
    Unavailable,
}

/// Implemented by every domain error enum so callers can branch on the
/// failure class without knowing the concrete variants.
pub trait Fault {
    fn kind(&self) -> ErrorKind;
}

/// Opaque failure from a persistence or reference-data port.
///
/// The engines never inspect or translate these; they propagate unchanged to
/// the caller, which owns failure-to-transport mapping.
#[derive(Debug, Error)]
#[error("port failure: {0}")]
pub struct PortError(#[from] pub anyhow::Error);

impl PortError {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(msg.into()))
    }
}

/// Result type returned by port trait methods.
pub type PortResult<T> = Result<T, PortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_error_preserves_source_message() {
        let err = PortError::msg("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }
}
