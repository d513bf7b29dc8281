use crate::domain::model::{Pager, PortView};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The port a presentation layer consumes. `PortCatalog` is the in-memory
/// implementation; callers that only read and edit ports should depend on
/// this trait rather than the concrete catalog.
#[async_trait]
pub trait PortRepository: Send + Sync {
    /// A flattened, optionally paged list of all ports with their owning
    /// countries. Resolves after the configured artificial delay.
    async fn list_ports(&self, pager: Option<Pager>) -> Result<Arc<Vec<PortView>>>;

    /// Adds a port to the given country, allocating its id. Resolves after
    /// the artificial delay.
    async fn create_port(&self, name: &str, country_id: u32) -> Result<PortView>;

    /// Removes the port from its owning country. `Ok(false)` when the
    /// country exists but held no port with that id.
    async fn remove_port(&self, port: &PortView) -> Result<bool>;
}
