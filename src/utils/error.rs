use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Country not found: {id}")]
    CountryNotFound { id: u32 },

    #[error("Dataset contains no ports")]
    EmptyDataset,

    #[error("Invalid UTC offset: {offset}")]
    InvalidOffset { offset: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl CatalogError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CountryNotFound { id } => {
                format!("No country with id {} exists in the dataset", id)
            }
            Self::EmptyDataset => "The dataset has no ports to work with".to_string(),
            Self::InvalidOffset { offset } => {
                format!("{} is not a valid UTC offset in minutes", offset)
            }
            Self::IoError(e) => format!("Could not read the dataset file: {}", e),
            Self::SerializationError(e) => format!("The dataset is not valid JSON: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::CountryNotFound { .. } => "Check the country id against the loaded dataset",
            Self::EmptyDataset => "Load a dataset that contains at least one port",
            Self::InvalidOffset { .. } => {
                "Offsets must be whole minutes between -720 and 840 (UTC-12:00 to UTC+14:00)"
            }
            Self::IoError(_) => "Check that the dataset path exists and is readable",
            Self::SerializationError(_) => {
                "The dataset must be a JSON array of countries with nested ports"
            }
            Self::ConfigError { .. } => "Fix the flagged option and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
