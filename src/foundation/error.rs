/// Convenience result type used across Bouba.
pub type BoubaResult<T> = Result<T, BoubaError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum BoubaError {
    /// Invalid caller-provided parameters or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoubaError {
    /// Build a [`BoubaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoubaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BoubaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

/// Why a single generation attempt was thrown away.
///
/// Rejections never reach the caller as hard errors: the session counts them against its retry
/// budget and starts over with a fresh chain.
#[derive(thiserror::Error, Clone, Debug, PartialEq, serde::Serialize)]
pub enum AttemptError {
    /// A circle found no free position within its local attempt budget.
    #[error("circle {index} found no free position after {attempts} attempts")]
    PlacementExhausted {
        /// Chain index of the circle that could not be placed.
        index: usize,
        /// Local attempts spent on it.
        attempts: usize,
    },

    /// A circle in the closed chain has a non-positive or non-finite radius or center.
    #[error("circle {index} is degenerate")]
    DegenerateCircle {
        /// Chain index of the offending circle.
        index: usize,
    },

    /// Two circles of the closed chain overlap.
    #[error("circles {first} and {second} overlap")]
    OverlapRejected {
        /// Lower chain index of the pair.
        first: usize,
        /// Higher chain index of the pair.
        second: usize,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
