use std::path::PathBuf;

use thiserror::Error;

use crate::models::Intensity;

/// Result type for catalog and playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Errors raised while reading songs, building the catalog or assembling a playlist
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Date text that is not `M/D/YYYY` or names an impossible day
    #[error("Invalid date '{text}', expected M/D/YYYY")]
    DateParse { text: String },

    #[error("Row {row}: missing value for required column '{field}'")]
    MissingField { field: &'static str, row: usize },

    #[error("Row {row}: unknown intensity '{label}'")]
    InvalidIntensity { label: String, row: usize },

    #[error("Invalid session template: {0}")]
    Template(String),

    #[error("Invalid session template JSON: {0}")]
    TemplateJson(#[from] serde_json::Error),

    /// Internal invariant violation: the sampler returned fewer songs than the template needs
    #[error(
        "No {intensity} songs left for slot {slot}; the catalog holds fewer of this intensity than the template requires"
    )]
    ExhaustedBucket { intensity: Intensity, slot: usize },
}
