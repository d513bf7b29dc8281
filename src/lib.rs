pub mod catalog;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use catalog::PortCatalog;
pub use domain::model::{Country, CountryRef, Dataset, Pager, Port, PortView};
pub use domain::repository::PortRepository;
pub use utils::error::{CatalogError, Result};
