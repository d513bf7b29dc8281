use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::ConfigError {
            message: format!("{}: value must be at least {}", field_name, min_value),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CatalogError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::ConfigError {
            message: format!("{}: value must be between {} and {}", field_name, min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("size", 5, 1).is_ok());
        assert!(validate_positive_number("size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("dataset", "./assets/mock-data.json").is_ok());
        assert!(validate_path("dataset", "").is_err());
        assert!(validate_path("dataset", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delay_ms", 1000u64, 0, 60_000).is_ok());
        assert!(validate_range("delay_ms", 120_000u64, 0, 60_000).is_err());
    }
}
