//! The legacy shape, whose field names are already the internal ones.

use serde::Deserialize;

use crate::beatmap::{
    Beatmap, Event, Note, Obstacle,
    beat::Beat,
    kind::{CutDirection, HandType},
};

/// Top-level object of the legacy shape.
///
/// Sliders in this shape are not read, because they are laid out differently from the internal ones.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LegacyBeatmap {
    /// The top-level `version` string if it existed, filled by the detector.
    #[serde(skip)]
    pub version: Option<String>,
    /// Notes and bombs.
    #[serde(rename = "_notes", default)]
    pub notes: Vec<LegacyNote>,
    /// Walls.
    #[serde(rename = "_obstacles", default)]
    pub obstacles: Vec<LegacyObstacle>,
    /// Basic events, same as the internal ones.
    #[serde(rename = "_events", default)]
    pub events: Vec<Event>,
}

/// Note of the legacy shape. A bomb is a note of type `3`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyNote {
    /// Time in beats.
    #[serde(rename = "_time")]
    pub time: Beat,
    /// Column.
    #[serde(rename = "_lineIndex")]
    pub line_index: i32,
    /// Row.
    #[serde(rename = "_lineLayer")]
    pub line_layer: i32,
    /// Color, or bomb.
    #[serde(rename = "_type")]
    pub hand: HandType,
    /// Swing direction.
    #[serde(rename = "_cutDirection")]
    pub cut_direction: CutDirection,
    /// Authored rotation, absent in most legacy files.
    #[serde(rename = "_angleOffset", default)]
    pub angle_offset: f64,
}

/// Wall of the legacy shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyObstacle {
    /// Time in beats.
    #[serde(rename = "_time")]
    pub time: Beat,
    /// Leftmost column.
    #[serde(rename = "_lineIndex")]
    pub line_index: i32,
    /// `0` for full height, `1` for crouch.
    #[serde(rename = "_type")]
    pub obstacle_type: f64,
    /// Length in beats.
    #[serde(rename = "_duration")]
    pub duration: f64,
    /// Width in columns.
    #[serde(rename = "_width")]
    pub width: i32,
}

impl From<LegacyNote> for Note {
    fn from(value: LegacyNote) -> Self {
        Self {
            angle_offset: value.angle_offset,
            ..Note::new(
                value.time,
                value.line_index,
                value.line_layer,
                value.hand,
                value.cut_direction,
            )
        }
    }
}

impl From<LegacyObstacle> for Obstacle {
    fn from(value: LegacyObstacle) -> Self {
        Self {
            time: value.time,
            line_index: value.line_index,
            line_layer: None,
            obstacle_type: value.obstacle_type,
            duration: value.duration,
            width: value.width,
            height: None,
        }
    }
}

impl LegacyBeatmap {
    /// Maps into the internal model, with no sliders nor burst sliders.
    #[must_use]
    pub fn into_beatmap(self) -> Beatmap {
        Beatmap {
            version: self.version,
            notes: self.notes.into_iter().map(Into::into).collect(),
            obstacles: self.obstacles.into_iter().map(Into::into).collect(),
            events: self.events,
            sliders: Vec::new(),
            burst_sliders: Vec::new(),
            chains: Vec::new(),
        }
    }
}
