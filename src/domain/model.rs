use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A country record as stored in the dataset. Ports are owned by their
/// country; they never carry a back-reference in canonical storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub ports: Vec<Port>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: u32,
    pub name: String,
}

/// The owning country of a port, without its port list. Used for the
/// read-time join so reads never mutate stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    pub id: u32,
    pub name: String,
}

impl From<&Country> for CountryRef {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
        }
    }
}

/// A port joined with its owning country, produced by the flattened read
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortView {
    pub port: Port,
    pub country: CountryRef,
}

/// 1-indexed pagination. Absent pager means the full collection; both
/// fields are required together, matching the service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub page: usize,
    pub size: usize,
}

impl Pager {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Slices a collection per standard slicing semantics: out-of-range
    /// pages yield an empty vec, a short tail yields a partial page.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = self.page.saturating_sub(1).saturating_mul(self.size);
        items.iter().skip(start).take(self.size).cloned().collect()
    }
}

/// The full in-memory dataset: an ordered list of countries, each with an
/// ordered list of ports. Loaded once and owned by the catalog for the
/// process lifetime; mutations happen in place, nothing is written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub countries: Vec<Country>,
}

impl Dataset {
    /// The demo dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(include_str!("../../assets/mock-data.json"))?;
        dataset.check_port_ids();
        Ok(dataset)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        dataset.check_port_ids();
        Ok(dataset)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!("Loading dataset from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn port_count(&self) -> usize {
        self.countries.iter().map(|c| c.ports.len()).sum()
    }

    // Port IDs must be unique across the whole dataset, not just within a
    // country. Malformed input is surfaced, not rejected.
    fn check_port_ids(&self) {
        let mut seen = HashSet::new();
        for country in &self.countries {
            for port in &country.ports {
                if !seen.insert(port.id) {
                    tracing::warn!(
                        "Duplicate port id {} in dataset (country '{}')",
                        port.id,
                        country.name
                    );
                }
            }
        }
    }
}
