pub mod fulfillment;
pub mod locations;
pub mod products;
pub mod stores;
pub mod system;
pub mod warehouses;
