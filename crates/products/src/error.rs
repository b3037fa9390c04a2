use thiserror::Error;

use depot_core::{ErrorKind, Fault, PortError};

/// Failures of the product CRUD operations.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product with id of {0} does not exist")]
    NotFound(i64),

    #[error("id was invalidly set on request")]
    IdInvalidlySet,

    #[error("product name is required and cannot be empty")]
    NameRequired,

    #[error(transparent)]
    Port(#[from] PortError),
}

impl Fault for ProductError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NameRequired => ErrorKind::InvalidInput,
            Self::IdInvalidlySet => ErrorKind::Unprocessable,
            Self::Port(_) => ErrorKind::Unavailable,
        }
    }
}
