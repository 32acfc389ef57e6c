//! Error types for the N-body core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by registry construction and integration.
///
/// All of these are unrecoverable for the call that produced them; a
/// failed `step` leaves every body exactly as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// A construction or stepping parameter violated its contract
    /// (non-positive mass, duplicate body name, non-positive timestep).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Lookup of a body name that was never registered.
    #[error("no body named '{0}'")]
    BodyNotFound(String),

    /// Two bodies coincide; the pairwise force is undefined and stepping
    /// on would propagate non-finite state.
    #[error("bodies '{first}' and '{second}' are at zero separation; force is undefined")]
    DegenerateState { first: String, second: String },
}
