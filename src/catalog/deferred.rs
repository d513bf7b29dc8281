use crate::catalog::service::{collect_ports, PortCatalog};
use crate::domain::model::{Pager, PortView};
use crate::domain::repository::PortRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::sync::Arc;

/// Handle to a pending (or completed) deferred port read. Cloning is
/// cheap; all clones resolve to the same result.
pub type SharedPorts = Shared<BoxFuture<'static, Arc<Vec<PortView>>>>;

pub(crate) struct Inflight {
    pager: Option<Pager>,
    future: SharedPorts,
}

impl PortCatalog {
    /// Deferred read of the flattened port list, resolving after the
    /// configured delay.
    ///
    /// Single-flight: while a read is pending, every caller gets a clone
    /// of the same handle. The in-flight slot is keyed on existence only,
    /// not on `pager`; a second caller with a different pager during the
    /// delay window receives the first caller's page (logged at warn).
    /// Once the result is delivered the slot is cleared and the next call
    /// starts a fresh computation. There is no cancellation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn ports_deferred(&self, pager: Option<Pager>) -> SharedPorts {
        let mut slot = self.inflight.lock().expect("in-flight slot poisoned");

        if let Some(inflight) = slot.as_ref() {
            if inflight.pager != pager {
                tracing::warn!(
                    "Joining in-flight port read: requested pager {:?} ignored in favor of {:?}",
                    pager,
                    inflight.pager
                );
            } else {
                tracing::debug!("Joining in-flight port read (pager: {:?})", pager);
            }
            return inflight.future.clone();
        }

        let countries = Arc::clone(&self.countries);
        let inflight_slot = Arc::clone(&self.inflight);
        let delay = self.delay;

        let future: SharedPorts = async move {
            let snapshot = collect_ports(
                &countries.read().expect("dataset lock poisoned"),
                pager,
            );
            tokio::time::sleep(delay).await;
            // Cleared before delivery, so a caller arriving after
            // completion always starts a fresh computation.
            inflight_slot
                .lock()
                .expect("in-flight slot poisoned")
                .take();
            Arc::new(snapshot)
        }
        .boxed()
        .shared();

        *slot = Some(Inflight {
            pager,
            future: future.clone(),
        });

        // The timer starts now, not at first poll, even if every caller
        // drops its handle.
        tokio::spawn(future.clone().map(|_| ()));

        future
    }

    /// Adds the port immediately, then resolves after the delay. Unlike
    /// the read path there is no deduplication; every call allocates and
    /// completes independently.
    pub async fn add_port_deferred(&self, name: &str, country_id: u32) -> Result<PortView> {
        let added = self.add_port(name, country_id)?;
        tokio::time::sleep(self.delay).await;
        Ok(added)
    }

    /// Deletes the port immediately, then resolves after the delay.
    pub async fn delete_port_deferred(&self, port: &PortView) -> Result<bool> {
        let removed = self.delete_port(port)?;
        tokio::time::sleep(self.delay).await;
        Ok(removed)
    }
}

#[async_trait]
impl PortRepository for PortCatalog {
    async fn list_ports(&self, pager: Option<Pager>) -> Result<Arc<Vec<PortView>>> {
        Ok(self.ports_deferred(pager).await)
    }

    async fn create_port(&self, name: &str, country_id: u32) -> Result<PortView> {
        self.add_port_deferred(name, country_id).await
    }

    async fn remove_port(&self, port: &PortView) -> Result<bool> {
        self.delete_port_deferred(port).await
    }
}
