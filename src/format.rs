//! Source shapes of beatmaps and their migration into [`Beatmap`].
//!
//! A source is detected by its top-level `version` string:
//!
//! - if its major component is `3`, it is read as [`V3Beatmap`], the versioned shape with short keys,
//! - otherwise, including when there is no version or it is not a string, it is read as [`LegacyBeatmap`], which is already shaped like the internal model but has no sliders.
//!
//! A version which cannot be read as an integer is not an error. It is reported as [`PostprocessWarning::UnparsableVersion`] on migration and the legacy shape is used.

pub mod legacy;
pub mod v3;
pub mod version;

use serde_json::Value;
use thiserror::Error;

use crate::{
    beatmap::Beatmap,
    process::{BeatmapOutput, PostprocessWarning},
};

use self::{legacy::LegacyBeatmap, v3::V3Beatmap, version::V3_MAJOR};

/// An error occurred when reading a beatmap source.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source is not a JSON text.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON does not fit the detected shape.
    #[error("unexpected value at `{path}`: {source}")]
    Shape {
        /// Path to the offending value, such as `colorNotes[3].d`.
        path: String,
        /// The underlying error.
        source: serde_json::Error,
    },
}

/// A decoded beatmap source, not migrated yet.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBeatmap {
    /// The internal-shaped source.
    Legacy(LegacyBeatmap),
    /// The versioned source of major version 3.
    V3(V3Beatmap),
}

impl RawBeatmap {
    /// Parses a JSON text and decodes it in the detected shape.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if `source` is not JSON, or [`ParseError::Shape`] if it does not fit the detected shape.
    pub fn from_json_str(source: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_json_value(value)
    }

    /// Decodes a JSON value in the detected shape.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Shape`] if `value` does not fit the detected shape.
    pub fn from_json_value(value: Value) -> Result<Self, ParseError> {
        let version = value
            .get("version")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        let major = version.as_deref().and_then(version::major_version);
        log::debug!("detected beatmap version {version:?} (major {major:?})");

        if major == Some(V3_MAJOR) {
            return decode(value).map(Self::V3);
        }
        let mut legacy: LegacyBeatmap = decode(value)?;
        legacy.version = version;
        Ok(Self::Legacy(legacy))
    }

    /// Migrates into the internal model.
    ///
    /// A step of [`crate::process::postprocess`].
    #[must_use]
    pub fn into_beatmap(self) -> BeatmapOutput {
        let mut warnings = Vec::new();
        let beatmap = match self {
            Self::V3(v3) => v3.into_beatmap(),
            Self::Legacy(legacy) => {
                if let Some(version) = legacy
                    .version
                    .as_deref()
                    .filter(|version| {
                        !version.is_empty() && version::major_version(version).is_none()
                    })
                {
                    warnings.push(PostprocessWarning::UnparsableVersion(version.to_owned()));
                }
                legacy.into_beatmap()
            }
        };
        log::debug!(
            "migrated beatmap: {} notes, {} obstacles, {} events, {} sliders, {} burst sliders",
            beatmap.notes.len(),
            beatmap.obstacles.len(),
            beatmap.events.len(),
            beatmap.sliders.len(),
            beatmap.burst_sliders.len(),
        );
        BeatmapOutput { beatmap, warnings }
    }
}

impl From<V3Beatmap> for RawBeatmap {
    fn from(value: V3Beatmap) -> Self {
        Self::V3(value)
    }
}

impl From<LegacyBeatmap> for RawBeatmap {
    fn from(value: LegacyBeatmap) -> Self {
        Self::Legacy(value)
    }
}

impl From<RawBeatmap> for Beatmap {
    fn from(value: RawBeatmap) -> Self {
        value.into_beatmap().beatmap
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    serde_path_to_error::deserialize(value).map_err(|err| ParseError::Shape {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}
