use thiserror::Error;

use depot_core::{ErrorKind, Fault, PortError};

/// Failures of the store CRUD operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store with id of {0} does not exist")]
    NotFound(i64),

    #[error("id was invalidly set on request")]
    IdInvalidlySet,

    #[error("store name is required and cannot be empty")]
    NameRequired,

    #[error("store name was not set on request")]
    NameNotSet,

    #[error("legacy system notification failed after database commit")]
    LegacySync(#[source] PortError),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl Fault for StoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NameRequired => ErrorKind::InvalidInput,
            // The original surfaced these two as 422s.
            Self::IdInvalidlySet | Self::NameNotSet => ErrorKind::Unprocessable,
            Self::LegacySync(_) | Self::Port(_) => ErrorKind::Unavailable,
        }
    }
}
