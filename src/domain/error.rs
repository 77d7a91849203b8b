// Trip domain errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripError {
    /// Write request carried nothing usable.
    #[error("No data provided")]
    NoData,

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

