//! Prelude module for this crate.
//!
//! You can use `use beatmap_rs::prelude::*;` to import the model, the pipeline and its outputs at once.

pub use crate::beatmap::{
    Beatmap, BurstSlider, Chain, Event, GridCoordinate, Note, Obstacle, Slider, TimelineObject,
    beat::{Beat, TryFromFloatError},
    kind::{CutDirection, HandType, ObstacleKind, ScoringType, TryFromCodeError},
};

pub use crate::process::{
    BeatmapOutput, PostprocessConfig, PostprocessWarning, angle::resolve_cut_angles,
    index::index_timeline, postprocess_beatmap, scoring::expand_chains,
};

#[cfg(feature = "serde")]
pub use crate::format::{
    ParseError, RawBeatmap, legacy::LegacyBeatmap, v3::V3Beatmap,
};

#[cfg(feature = "serde")]
pub use crate::process::{postprocess, postprocess_json, postprocess_with_config};
