//! Application wiring: services behind the routers.

use std::sync::Arc;

use axum::{extract::Extension, Router};

use depot_fulfillment::{AssociationStore, WarehouseAllocation};
use depot_infra::{
    InMemoryAssociationStore, InMemoryProductRepository, InMemoryStoreRepository,
    InMemoryWarehouseStore, LoggingLegacyStoreManager, StaticLocationCatalog,
};
use depot_products::ProductService;
use depot_stores::StoreService;
use depot_warehouses::{
    ArchiveWarehouse, CreateWarehouse, LocationResolver, ReplaceWarehouse, WarehouseStore,
};

pub mod dto;
pub mod errors;
pub mod routes;

/// Everything the route handlers need, shared via `Extension`.
pub struct AppServices {
    pub stores: StoreService,
    pub products: ProductService,
    pub create_warehouse: CreateWarehouse,
    pub archive_warehouse: ArchiveWarehouse,
    pub replace_warehouse: ReplaceWarehouse,
    pub allocation: WarehouseAllocation,
    /// Direct read access for the listing endpoints.
    pub warehouses: Arc<dyn WarehouseStore>,
    pub associations: Arc<dyn AssociationStore>,
    pub locations: Arc<dyn LocationResolver>,
}

fn wire(
    warehouses: Arc<dyn WarehouseStore>,
    associations: Arc<dyn AssociationStore>,
    locations: Arc<dyn LocationResolver>,
    stores: StoreService,
    products: ProductService,
) -> AppServices {
    AppServices {
        stores,
        products,
        create_warehouse: CreateWarehouse::new(warehouses.clone(), locations.clone()),
        archive_warehouse: ArchiveWarehouse::new(warehouses.clone()),
        replace_warehouse: ReplaceWarehouse::new(warehouses.clone(), locations.clone()),
        allocation: WarehouseAllocation::new(associations.clone()),
        warehouses,
        associations,
        locations,
    }
}

/// In-memory wiring (dev default and black-box tests).
pub fn build_in_memory_services() -> AppServices {
    let warehouses: Arc<dyn WarehouseStore> = Arc::new(InMemoryWarehouseStore::new());
    let associations: Arc<dyn AssociationStore> = Arc::new(InMemoryAssociationStore::new());
    let locations: Arc<dyn LocationResolver> = Arc::new(StaticLocationCatalog::new());
    let stores = StoreService::new(
        Arc::new(InMemoryStoreRepository::new()),
        Arc::new(LoggingLegacyStoreManager),
    );
    let products = ProductService::new(Arc::new(InMemoryProductRepository::new()));
    wire(warehouses, associations, locations, stores, products)
}

/// Postgres-backed wiring; `schema.sql` must have been applied.
#[cfg(feature = "postgres")]
pub fn build_postgres_services(pool: sqlx::PgPool) -> AppServices {
    use depot_infra::{
        PgAssociationStore, PgProductRepository, PgStoreRepository, PgWarehouseStore,
    };

    let warehouses: Arc<dyn WarehouseStore> = Arc::new(PgWarehouseStore::new(pool.clone()));
    let associations: Arc<dyn AssociationStore> = Arc::new(PgAssociationStore::new(pool.clone()));
    let locations: Arc<dyn LocationResolver> = Arc::new(StaticLocationCatalog::new());
    let stores = StoreService::new(
        Arc::new(PgStoreRepository::new(pool.clone())),
        Arc::new(LoggingLegacyStoreManager),
    );
    let products = ProductService::new(Arc::new(PgProductRepository::new(pool)));
    wire(warehouses, associations, locations, stores, products)
}

/// Assemble the full router over the given services.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .nest("/store", routes::stores::router())
        .nest("/product", routes::products::router())
        .nest("/warehouse", routes::warehouses::router())
        .nest(
            "/fulfillment/warehouse-product-store",
            routes::fulfillment::router(),
        )
        .nest("/location", routes::locations::router())
        .merge(routes::system::router())
        .layer(Extension(services))
}
