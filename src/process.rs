//! The postprocessing pipeline.
//!
//! A beatmap goes through these stages in order, each one working on the output of the previous one:
//!
//! 1. migration into [`Beatmap`] (`RawBeatmap::into_beatmap` in the `format` module),
//! 2. cut angle resolution of simultaneous notes ([`angle::resolve_cut_angles`]),
//! 3. scoring roles of slider heads and tails, and chain synthesis ([`scoring::expand_chains`]),
//! 4. chronological indexing ([`index::index_timeline`]).
//!
//! No stage fails. Anything odd in the source is left as it was, and reported as a [`PostprocessWarning`].

pub mod angle;
pub mod index;
pub mod scoring;

use thiserror::Error;

#[cfg(feature = "serde")]
use crate::format::{ParseError, RawBeatmap};
use crate::beatmap::{
    Beatmap, GridCoordinate,
    beat::Beat,
    kind::{CutDirection, HandType},
};

/// Tunables of the pipeline. The defaults reproduce the reference behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct PostprocessConfig {
    /// Notes closer than this in beats to the first note of a group belong to the group.
    pub simultaneity_epsilon: f64,
    /// A pair of notes whose swing is off the line between them by more than this in degrees gets no angle.
    pub max_pair_angle: f64,
    /// Extra degrees given to a wildcard note paired with a diagonal one.
    pub diagonal_any_offset: f64,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            simultaneity_epsilon: 0.0001,
            max_pair_angle: 40.0,
            diagonal_any_offset: 45.0,
        }
    }
}

impl PostprocessConfig {
    /// Sets [`PostprocessConfig::simultaneity_epsilon`].
    #[must_use]
    pub fn simultaneity_epsilon(mut self, epsilon: f64) -> Self {
        self.simultaneity_epsilon = epsilon;
        self
    }

    /// Sets [`PostprocessConfig::max_pair_angle`].
    #[must_use]
    pub fn max_pair_angle(mut self, degrees: f64) -> Self {
        self.max_pair_angle = degrees;
        self
    }

    /// Sets [`PostprocessConfig::diagonal_any_offset`].
    #[must_use]
    pub fn diagonal_any_offset(mut self, degrees: f64) -> Self {
        self.diagonal_any_offset = degrees;
        self
    }
}

/// Something in the source that postprocessing left as it was.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PostprocessWarning {
    /// The version string has no integer major component, so the source was read in the legacy shape.
    #[error("version {0:?} is not numeric, read as the legacy shape")]
    UnparsableVersion(String),
    /// Two simultaneous notes for the same hand require different swings.
    #[error("notes at beat {time} for {hand:?} require different swings {first:?} and {second:?}")]
    ConflictingDirections {
        /// Time of the first note.
        time: Beat,
        /// The hand.
        hand: HandType,
        /// Direction of the first note.
        first: CutDirection,
        /// Direction of the second note.
        second: CutDirection,
    },
    /// Two simultaneous notes for the same hand are too far off their swing.
    #[error("notes at beat {time} for {hand:?} are {angle} degrees off their swing")]
    AngleOverThreshold {
        /// Time of the primary note.
        time: Beat,
        /// The hand.
        hand: HandType,
        /// The computed angle in degrees.
        angle: f64,
    },
    /// No note is at the head of a slider.
    #[error("no note at the head {coordinate:?} of slider #{slider}")]
    UnmatchedSliderHead {
        /// Position in [`Beatmap::sliders`].
        slider: usize,
        /// The head position.
        coordinate: GridCoordinate,
    },
    /// No note is at the tail of a slider.
    #[error("no note at the tail {coordinate:?} of slider #{slider}")]
    UnmatchedSliderTail {
        /// Position in [`Beatmap::sliders`].
        slider: usize,
        /// The tail position.
        coordinate: GridCoordinate,
    },
    /// No note is at the head of a burst slider.
    #[error("no note at the head {coordinate:?} of burst slider #{burst_slider}")]
    UnmatchedBurstSliderHead {
        /// Position in [`Beatmap::burst_sliders`].
        burst_slider: usize,
        /// The head position.
        coordinate: GridCoordinate,
    },
}

/// Output of postprocessing, or of one of its steps.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapOutput {
    /// The processed beatmap.
    pub beatmap: Beatmap,
    /// Warnings that occurred during processing.
    pub warnings: Vec<PostprocessWarning>,
}

/// Parses a JSON beatmap source and postprocesses it with the default config.
///
/// # Example
///
/// ```
/// use beatmap_rs::process::{BeatmapOutput, postprocess_json};
///
/// let source = r#"{
///     "version": "3.2.0",
///     "colorNotes": [
///         { "b": 4.0, "x": 1, "y": 0, "c": 0, "d": 8 },
///         { "b": 4.0, "x": 2, "y": 1, "c": 0, "d": 8 }
///     ],
///     "bombNotes": [{ "b": 5.0, "x": 3, "y": 0 }]
/// }"#;
/// let BeatmapOutput { beatmap, warnings } = postprocess_json(source).unwrap();
/// assert!(warnings.is_empty());
/// assert_eq!(beatmap.timeline().count(), 2);
/// assert_eq!(
///     beatmap.notes[0].cut_direction_angle_offset,
///     beatmap.notes[1].cut_direction_angle_offset,
/// );
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] if `source` is not a beatmap.
#[cfg(feature = "serde")]
pub fn postprocess_json(source: &str) -> Result<BeatmapOutput, ParseError> {
    Ok(postprocess(RawBeatmap::from_json_str(source)?))
}

/// Postprocesses a decoded beatmap source with the default config.
#[cfg(feature = "serde")]
#[must_use]
pub fn postprocess(raw: RawBeatmap) -> BeatmapOutput {
    postprocess_with_config(raw, &PostprocessConfig::default())
}

/// Postprocesses a decoded beatmap source.
#[cfg(feature = "serde")]
#[must_use]
pub fn postprocess_with_config(raw: RawBeatmap, config: &PostprocessConfig) -> BeatmapOutput {
    let BeatmapOutput {
        beatmap,
        mut warnings,
    } = raw.into_beatmap();

    let BeatmapOutput {
        beatmap,
        warnings: after_warnings,
    } = postprocess_beatmap(beatmap, config);

    warnings.extend(after_warnings);

    BeatmapOutput { beatmap, warnings }
}

/// Runs the stages after migration on an internal-shaped beatmap.
///
/// A step of `postprocess`.
#[must_use]
pub fn postprocess_beatmap(mut beatmap: Beatmap, config: &PostprocessConfig) -> BeatmapOutput {
    let mut warnings = angle::resolve_cut_angles(&mut beatmap, config);
    warnings.extend(scoring::expand_chains(&mut beatmap));
    let indexed = index::index_timeline(&mut beatmap);
    log::debug!(
        "postprocessed beatmap: {indexed} scorable objects, {} chains, {} warnings",
        beatmap.chains.len(),
        warnings.len(),
    );
    BeatmapOutput { beatmap, warnings }
}
