//! Finite beat position definition.

use std::hash::{Hash, Hasher};

use thiserror::Error;

/// A position on the timeline in beats. It has only finite value.
///
/// Unlike a plain `f64`, this is totally ordered and hashable, so it can be used as a part of the exact coordinate key when matching sliders to notes. `0.0` and `-0.0` are the same beat.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
#[repr(transparent)]
pub struct Beat(f64);

impl PartialEq for Beat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Beat {}

impl PartialOrd for Beat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Beat {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Both sides are finite, so only the sign of zero differs from `total_cmp`.
        self.normalized().total_cmp(&other.normalized())
    }
}

impl Hash for Beat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().to_bits().hash(state);
    }
}

impl From<Beat> for f64 {
    fn from(value: Beat) -> Self {
        value.as_f64()
    }
}

/// Error type for `Beat::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("finite beat expected: {0}")]
pub struct TryFromFloatError(pub(crate) f64);

impl TryFrom<f64> for Beat {
    type Error = TryFromFloatError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        value
            .is_finite()
            .then_some(Self(value))
            .ok_or(TryFromFloatError(value))
    }
}

impl std::fmt::Display for Beat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Beat {
    /// The start of the timeline.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Beat` from `f64` if `float` is finite, otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn new(float: f64) -> Option<Self> {
        Self::try_from(float).ok()
    }

    /// Gets the internal value.
    #[inline]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    /// Absolute distance to `other` in beats.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }

    fn normalized(self) -> f64 {
        // -0.0 + 0.0 == +0.0
        self.0 + 0.0
    }
}
