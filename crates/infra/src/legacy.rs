//! Outbound gateway to the legacy store-management system.
//!
//! The real system is being strangled; its replacement here records the
//! notification in the structured log, which is what the original gateway
//! stub did as well.

use async_trait::async_trait;
use tracing::info;

use depot_core::PortResult;
use depot_stores::{LegacyStoreChannel, Store};

pub struct LoggingLegacyStoreManager;

#[async_trait]
impl LegacyStoreChannel for LoggingLegacyStoreManager {
    async fn store_created(&self, store: &Store) -> PortResult<()> {
        info!(store = %store.name, id = ?store.id, "legacy system notified of store creation");
        Ok(())
    }

    async fn store_updated(&self, store: &Store) -> PortResult<()> {
        info!(store = %store.name, id = ?store.id, "legacy system notified of store update");
        Ok(())
    }
}
