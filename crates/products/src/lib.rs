//! `depot-products` — product catalog management.

pub mod error;
pub mod model;
pub mod ports;
pub mod service;

pub use error::ProductError;
pub use model::Product;
pub use ports::ProductRepository;
pub use service::ProductService;
