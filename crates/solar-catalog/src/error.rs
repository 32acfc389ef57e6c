//! Error types for catalog lookup and system assembly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// An ephemeris source could not produce a state vector.
    #[error("ephemeris source failed for '{body}': {reason}")]
    Source { body: String, reason: String },

    /// The core rejected a body or a step.
    #[error(transparent)]
    Sim(#[from] nbody::Error),
}
