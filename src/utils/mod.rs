pub mod error;
pub mod logger;
pub mod timezone;
pub mod validation;
