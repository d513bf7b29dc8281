use crate::catalog::deferred::Inflight;
use crate::domain::model::{Country, CountryRef, Dataset, Pager, Port, PortView};
use crate::utils::error::{CatalogError, Result};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Data access over an injected in-memory dataset of countries and their
/// ports. The dataset lives for the lifetime of the catalog; add/delete
/// mutate it in place and nothing is persisted back.
pub struct PortCatalog {
    pub(crate) countries: Arc<RwLock<Vec<Country>>>,
    pub(crate) delay: Duration,
    pub(crate) inflight: Arc<Mutex<Option<Inflight>>>,
}

impl PortCatalog {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_delay(dataset, DEFAULT_DELAY)
    }

    /// `delay` is the artificial latency applied by every deferred
    /// operation. A demo affordance, not a performance mechanism.
    pub fn with_delay(dataset: Dataset, delay: Duration) -> Self {
        Self {
            countries: Arc::new(RwLock::new(dataset.countries)),
            delay,
            inflight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// All countries, or a 1-indexed page of them.
    pub fn countries(&self, pager: Option<Pager>) -> Vec<Country> {
        let countries = self.countries.read().expect("dataset lock poisoned");
        tracing::debug!("Reading countries (pager: {:?})", pager);
        match pager {
            Some(p) => p.slice(&countries),
            None => countries.clone(),
        }
    }

    /// All ports flattened in dataset order, each joined with its owning
    /// country, then optionally paged. The join is computed per read;
    /// stored records are never touched.
    pub fn ports(&self, pager: Option<Pager>) -> Vec<PortView> {
        let countries = self.countries.read().expect("dataset lock poisoned");
        tracing::debug!("Reading ports (pager: {:?})", pager);
        collect_ports(&countries, pager)
    }

    /// Keeps ports whose own name or owning country's name contains
    /// `text`. Both sides are lowercased, so the match is
    /// case-insensitive regardless of how the caller cased `text`.
    pub fn filter_ports(ports: &[PortView], text: &str) -> Vec<PortView> {
        let needle = text.to_lowercase();
        ports
            .iter()
            .filter(|view| {
                view.port.name.to_lowercase().contains(&needle)
                    || view.country.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// The next free port id: max existing id across the whole dataset,
    /// plus one. Ids are unique dataset-wide, not per country.
    pub fn next_port_id(&self) -> Result<u32> {
        let countries = self.countries.read().expect("dataset lock poisoned");
        next_id(&countries)
    }

    /// Allocates an id and appends a port to the given country.
    pub fn add_port(&self, name: &str, country_id: u32) -> Result<PortView> {
        let mut countries = self.countries.write().expect("dataset lock poisoned");
        let id = next_id(&countries)?;
        let country = countries
            .iter_mut()
            .find(|c| c.id == country_id)
            .ok_or(CatalogError::CountryNotFound { id: country_id })?;

        let port = Port {
            id,
            name: name.to_string(),
        };
        country.ports.push(port.clone());
        tracing::info!("Added port '{}' (id {}) to {}", name, id, country.name);

        Ok(PortView {
            port,
            country: CountryRef::from(&*country),
        })
    }

    /// Removes any port with the matching id from its owning country.
    /// `Ok(false)` when the country held no such port.
    pub fn delete_port(&self, view: &PortView) -> Result<bool> {
        let mut countries = self.countries.write().expect("dataset lock poisoned");
        let country = countries
            .iter_mut()
            .find(|c| c.id == view.country.id)
            .ok_or(CatalogError::CountryNotFound {
                id: view.country.id,
            })?;

        let before = country.ports.len();
        country.ports.retain(|p| p.id != view.port.id);
        let removed = country.ports.len() != before;

        if removed {
            tracing::info!(
                "Deleted port '{}' (id {}) from {}",
                view.port.name,
                view.port.id,
                country.name
            );
        } else {
            tracing::debug!("No port with id {} in {}", view.port.id, country.name);
        }

        Ok(removed)
    }
}

pub(crate) fn collect_ports(countries: &[Country], pager: Option<Pager>) -> Vec<PortView> {
    let mut views = Vec::new();
    for country in countries {
        let country_ref = CountryRef::from(country);
        for port in &country.ports {
            views.push(PortView {
                port: port.clone(),
                country: country_ref.clone(),
            });
        }
    }

    match pager {
        Some(p) => p.slice(&views),
        None => views,
    }
}

fn next_id(countries: &[Country]) -> Result<u32> {
    countries
        .iter()
        .flat_map(|c| &c.ports)
        .map(|p| p.id)
        .max()
        .map(|max| max + 1)
        .ok_or(CatalogError::EmptyDataset)
}
