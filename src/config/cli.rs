use crate::config::toml_config::TomlConfig;
use crate::domain::model::Pager;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "port-catalog")]
#[command(about = "Browse and edit an in-memory country/port dataset")]
pub struct CliConfig {
    /// Path to a dataset JSON file; the bundled demo data is used when
    /// omitted.
    #[arg(long)]
    pub dataset: Option<String>,

    /// Path to a TOML config file; CLI flags win over file values.
    #[arg(long)]
    pub config: Option<String>,

    /// 1-indexed page to read; requires --size.
    #[arg(long)]
    pub page: Option<usize>,

    /// Page size; requires --page.
    #[arg(long)]
    pub size: Option<usize>,

    /// Keep only ports whose name or country matches this text.
    #[arg(long)]
    pub filter: Option<String>,

    /// Artificial delay applied to deferred operations, in milliseconds.
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills unset options from a TOML config file. Flags given on the
    /// command line are left alone.
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if self.dataset.is_none() {
            self.dataset = file.dataset.as_ref().and_then(|d| d.path.clone());
        }
        if let Some(paging) = &file.paging {
            if self.page.is_none() {
                self.page = paging.page;
            }
            if self.size.is_none() {
                self.size = paging.size;
            }
        }
        if let Some(deferred) = &file.deferred {
            if let Some(delay_ms) = deferred.delay_ms {
                self.delay_ms = delay_ms;
            }
        }
    }

    /// A pager only when both page and size were provided.
    pub fn pager(&self) -> Option<Pager> {
        match (self.page, self.size) {
            (Some(page), Some(size)) => Some(Pager::new(page, size)),
            _ => None,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dataset) = &self.dataset {
            validate_path("dataset", dataset)?;
        }
        if let Some(page) = self.page {
            validate_positive_number("page", page, 1)?;
        }
        if let Some(size) = self.size {
            validate_positive_number("size", size, 1)?;
        }
        validate_range("delay_ms", self.delay_ms, 0, 60_000)?;
        Ok(())
    }
}
