//! Error types for space construction and topology checks.

use gradmaze_core::ObsShape;
use thiserror::Error;

/// Errors arising from space construction or layout analysis.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SpaceError {
    /// An observation space was requested with a zero dimension.
    #[error("observation space {shape} has no elements")]
    EmptyObservationSpace {
        /// The rejected shape.
        shape: ObsShape,
    },
    /// A discrete space was requested with zero members.
    #[error("discrete space must have at least one member")]
    EmptyDiscrete,
    /// A room layout is not a connected cross.
    #[error("layout is not a cross: {reason}")]
    NotACross {
        /// Which property failed.
        reason: String,
    },
}
