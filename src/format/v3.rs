//! The versioned shape of major version 3, with short field keys.
//!
//! Each object type maps field for field into its internal counterpart, except:
//!
//! - bomb notes become [`Note`]s with [`HandType::BOMB`], [`CutDirection::None`] and [`ScoringType::NoScore`],
//! - the obstacle type is half of the `y` value, which doubled the type in this shape.

use serde::Deserialize;

use crate::beatmap::{
    Beatmap, BurstSlider, Event, Note, Obstacle, Slider,
    beat::Beat,
    kind::{CutDirection, HandType, ScoringType},
};

/// Top-level object of the versioned shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V3Beatmap {
    /// Version string, whose major component is `3`.
    pub version: String,
    /// Notes to hit.
    #[serde(default)]
    pub color_notes: Vec<ColorNote>,
    /// Notes to avoid.
    #[serde(default)]
    pub bomb_notes: Vec<BombNote>,
    /// Walls.
    #[serde(default)]
    pub obstacles: Vec<V3Obstacle>,
    /// Basic events.
    #[serde(default)]
    pub basic_beatmap_events: Vec<BasicEvent>,
    /// Arcs.
    #[serde(default)]
    pub sliders: Vec<V3Slider>,
    /// Chains.
    #[serde(default)]
    pub burst_sliders: Vec<V3BurstSlider>,
}

/// A note to hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorNote {
    /// Beat.
    pub b: Beat,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Color.
    pub c: HandType,
    /// Direction.
    pub d: CutDirection,
    /// Angle offset in degrees.
    #[serde(default)]
    pub a: f64,
}

/// A note to avoid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BombNote {
    /// Beat.
    pub b: Beat,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// A wall.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct V3Obstacle {
    /// Beat.
    pub b: Beat,
    /// Leftmost column.
    pub x: i32,
    /// Bottom row, twice the legacy type.
    pub y: i32,
    /// Duration in beats.
    pub d: f64,
    /// Width in columns.
    pub w: i32,
    /// Height in rows.
    pub h: i32,
}

/// A basic event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BasicEvent {
    /// Beat.
    pub b: Beat,
    /// Event type.
    pub et: i32,
    /// Value.
    pub i: i32,
    /// Float value.
    #[serde(default)]
    pub f: Option<f64>,
}

/// An arc.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct V3Slider {
    /// Head beat.
    pub b: Beat,
    /// Head column.
    pub x: i32,
    /// Head row.
    pub y: i32,
    /// Color.
    pub c: HandType,
    /// Head direction.
    pub d: CutDirection,
    /// Tail beat.
    pub tb: Beat,
    /// Tail column.
    pub tx: i32,
    /// Tail row.
    pub ty: i32,
    /// Head control point length multiplier.
    pub mu: f64,
    /// Tail control point length multiplier.
    pub tmu: f64,
    /// Tail direction.
    pub tc: CutDirection,
    /// Mid anchor mode.
    pub m: i32,
}

/// A chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct V3BurstSlider {
    /// Head beat.
    pub b: Beat,
    /// Head column.
    pub x: i32,
    /// Head row.
    pub y: i32,
    /// Color.
    pub c: HandType,
    /// Head direction.
    pub d: CutDirection,
    /// Tail beat.
    pub tb: Beat,
    /// Tail column.
    pub tx: i32,
    /// Tail row.
    pub ty: i32,
    /// Slice count including the head.
    pub sc: i32,
    /// Squish factor.
    pub s: f64,
}

impl From<ColorNote> for Note {
    fn from(value: ColorNote) -> Self {
        Self {
            angle_offset: value.a,
            scoring_type: ScoringType::Normal,
            ..Note::new(value.b, value.x, value.y, value.c, value.d)
        }
    }
}

impl From<BombNote> for Note {
    fn from(value: BombNote) -> Self {
        Note::bomb(value.b, value.x, value.y)
    }
}

impl From<V3Obstacle> for Obstacle {
    fn from(value: V3Obstacle) -> Self {
        Self {
            time: value.b,
            line_index: value.x,
            line_layer: Some(value.y),
            obstacle_type: f64::from(value.y) / 2.0,
            duration: value.d,
            width: value.w,
            height: Some(value.h),
        }
    }
}

impl From<BasicEvent> for Event {
    fn from(value: BasicEvent) -> Self {
        Self {
            time: value.b,
            event_type: value.et,
            value: value.i,
            float_value: value.f,
        }
    }
}

impl From<V3Slider> for Slider {
    fn from(value: V3Slider) -> Self {
        Self {
            time: value.b,
            line_index: value.x,
            line_layer: value.y,
            hand: value.c,
            cut_direction: value.d,
            tail_time: value.tb,
            tail_line_index: value.tx,
            tail_line_layer: value.ty,
            head_control_point_length_multiplier: value.mu,
            tail_control_point_length_multiplier: value.tmu,
            tail_cut_direction: value.tc,
            arc_mid_anchor_mode: value.m,
        }
    }
}

impl From<V3BurstSlider> for BurstSlider {
    fn from(value: V3BurstSlider) -> Self {
        Self {
            time: value.b,
            line_index: value.x,
            line_layer: value.y,
            hand: value.c,
            cut_direction: value.d,
            tail_time: value.tb,
            tail_line_index: value.tx,
            tail_line_layer: value.ty,
            slice_count: value.sc,
            squish_amount: value.s,
        }
    }
}

impl V3Beatmap {
    /// Maps into the internal model. Bombs follow the color notes.
    #[must_use]
    pub fn into_beatmap(self) -> Beatmap {
        let notes = self
            .color_notes
            .into_iter()
            .map(Note::from)
            .chain(self.bomb_notes.into_iter().map(Note::from))
            .collect();
        Beatmap {
            version: Some(self.version),
            notes,
            obstacles: self.obstacles.into_iter().map(Into::into).collect(),
            events: self
                .basic_beatmap_events
                .into_iter()
                .map(Into::into)
                .collect(),
            sliders: self.sliders.into_iter().map(Into::into).collect(),
            burst_sliders: self.burst_sliders.into_iter().map(Into::into).collect(),
            chains: Vec::new(),
        }
    }
}
