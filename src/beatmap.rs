//! The canonical internal beatmap model.
//!
//! Every supported source format is migrated into [`Beatmap`] by the `format` module, and every pipeline stage in [`crate::process`] works on it.
//!
//! With the `serde` feature, the model serializes with the internal field names (`_notes`, `_time`, `_cutDirection` and so on), which is the shape consumers of a postprocessed beatmap read.

pub mod beat;
pub mod kind;

use itertools::Itertools;

use self::{
    beat::Beat,
    kind::{CutDirection, HandType, ObstacleKind, ScoringType},
};

/// A postprocessed (or being postprocessed) beatmap.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// Version string of the source, if it had one.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
    /// Notes and bombs, in the source order.
    #[cfg_attr(feature = "serde", serde(rename = "_notes", default))]
    pub notes: Vec<Note>,
    /// Walls to dodge.
    #[cfg_attr(feature = "serde", serde(rename = "_obstacles", default))]
    pub obstacles: Vec<Obstacle>,
    /// Lighting and other basic events.
    #[cfg_attr(feature = "serde", serde(rename = "_events", default))]
    pub events: Vec<Event>,
    /// Arcs connecting two notes.
    #[cfg_attr(feature = "serde", serde(rename = "_sliders", default))]
    pub sliders: Vec<Slider>,
    /// Chains of slices starting from a note.
    #[cfg_attr(feature = "serde", serde(rename = "_burstSliders", default))]
    pub burst_sliders: Vec<BurstSlider>,
    /// Slices synthesized from [`Beatmap::burst_sliders`].
    #[cfg_attr(feature = "serde", serde(rename = "_chains", default))]
    pub chains: Vec<Chain>,
}

impl Beatmap {
    /// Iterates the scorable objects in the order of their assigned `index`.
    ///
    /// Objects without an index, such as bombs or everything before indexing, are not yielded.
    pub fn timeline(&self) -> impl Iterator<Item = TimelineObject<'_>> {
        self.notes
            .iter()
            .map(TimelineObject::Note)
            .chain(self.chains.iter().map(TimelineObject::Chain))
            .filter_map(|obj| obj.index().map(|index| (index, obj)))
            .sorted_by_key(|&(index, _)| index)
            .map(|(_, obj)| obj)
    }

    /// Number of objects counted in the combo, that is playable notes and chains.
    #[must_use]
    pub fn scorable_count(&self) -> usize {
        self.notes.iter().filter(|note| note.hand.is_playable()).count()
            + self
                .chains
                .iter()
                .filter(|chain| chain.slider.hand.is_playable())
                .count()
    }
}

/// Exact position of an object head, used to match sliders with notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    /// Time in beats.
    pub time: Beat,
    /// Column, from left.
    pub line_index: i32,
    /// Row, from bottom.
    pub line_layer: i32,
}

/// A note or a bomb.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// Time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_time"))]
    pub time: Beat,
    /// Column, from left.
    #[cfg_attr(feature = "serde", serde(rename = "_lineIndex"))]
    pub line_index: i32,
    /// Row, from bottom.
    #[cfg_attr(feature = "serde", serde(rename = "_lineLayer"))]
    pub line_layer: i32,
    /// Saber to hit this, or a bomb.
    #[cfg_attr(feature = "serde", serde(rename = "_type"))]
    pub hand: HandType,
    /// Required swing direction.
    #[cfg_attr(feature = "serde", serde(rename = "_cutDirection"))]
    pub cut_direction: CutDirection,
    /// Rotation in degrees authored in the source.
    #[cfg_attr(feature = "serde", serde(rename = "_angleOffset", default))]
    pub angle_offset: f64,
    /// Role in scoring.
    #[cfg_attr(feature = "serde", serde(rename = "_scoringType"))]
    pub scoring_type: ScoringType,
    /// Rotation in degrees computed so that a note faces its simultaneous partner. `None` if the note had no partner or the pair was rejected.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "cutDirectionAngleOffset",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub cut_direction_angle_offset: Option<f64>,
    /// Position in [`Beatmap::burst_sliders`] of the burst slider starting at this note.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "_burstSliderIndex",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub burst_slider: Option<usize>,
    /// Chronological rank among scorable objects.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_index", default, skip_serializing_if = "Option::is_none")
    )]
    pub index: Option<usize>,
}

impl Note {
    /// Creates a note with no authored angle. Its scoring type is [`ScoringType::Normal`] for a playable hand, otherwise [`ScoringType::NoScore`].
    #[must_use]
    pub fn new(
        time: Beat,
        line_index: i32,
        line_layer: i32,
        hand: HandType,
        cut_direction: CutDirection,
    ) -> Self {
        Self {
            time,
            line_index,
            line_layer,
            hand,
            cut_direction,
            angle_offset: 0.0,
            scoring_type: if hand.is_playable() {
                ScoringType::Normal
            } else {
                ScoringType::NoScore
            },
            cut_direction_angle_offset: None,
            burst_slider: None,
            index: None,
        }
    }

    /// Creates a bomb in the sentinel shape of migrated bombs.
    #[must_use]
    pub fn bomb(time: Beat, line_index: i32, line_layer: i32) -> Self {
        Self::new(
            time,
            line_index,
            line_layer,
            HandType::BOMB,
            CutDirection::None,
        )
    }

    /// Whether this is a bomb, which never scores.
    #[must_use]
    pub fn is_bomb(&self) -> bool {
        !self.hand.is_playable()
    }

    /// Exact position of this note.
    #[must_use]
    pub const fn coordinate(&self) -> GridCoordinate {
        GridCoordinate {
            time: self.time,
            line_index: self.line_index,
            line_layer: self.line_layer,
        }
    }
}

/// A wall.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    /// Time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_time"))]
    pub time: Beat,
    /// Leftmost column.
    #[cfg_attr(feature = "serde", serde(rename = "_lineIndex"))]
    pub line_index: i32,
    /// Bottom row. Only the versioned format has this.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_lineLayer", default, skip_serializing_if = "Option::is_none")
    )]
    pub line_layer: Option<i32>,
    /// Shape code, see [`Obstacle::kind`]. Migrated walls take half of their bottom row, so it may be fractional.
    #[cfg_attr(feature = "serde", serde(rename = "_type"))]
    pub obstacle_type: f64,
    /// Length in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_duration"))]
    pub duration: f64,
    /// Width in columns.
    #[cfg_attr(feature = "serde", serde(rename = "_width"))]
    pub width: i32,
    /// Height in rows. Only the versioned format has this.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_height", default, skip_serializing_if = "Option::is_none")
    )]
    pub height: Option<i32>,
}

impl Obstacle {
    /// Shape of this wall.
    #[must_use]
    pub fn kind(&self) -> ObstacleKind {
        self.obstacle_type.into()
    }

    /// Time in beats where this wall ends.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.time.as_f64() + self.duration
    }
}

/// A basic beatmap event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_time"))]
    pub time: Beat,
    /// Kind of the event.
    #[cfg_attr(feature = "serde", serde(rename = "_type"))]
    pub event_type: i32,
    /// Value of the event.
    #[cfg_attr(feature = "serde", serde(rename = "_value"))]
    pub value: i32,
    /// Brightness or other float parameter.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_floatValue", default, skip_serializing_if = "Option::is_none")
    )]
    pub float_value: Option<f64>,
}

/// An arc from a head note to a tail note. It does not appear in the timeline by itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// Head time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_time"))]
    pub time: Beat,
    /// Head column.
    #[cfg_attr(feature = "serde", serde(rename = "_lineIndex"))]
    pub line_index: i32,
    /// Head row.
    #[cfg_attr(feature = "serde", serde(rename = "_lineLayer"))]
    pub line_layer: i32,
    /// Color of the arc.
    #[cfg_attr(feature = "serde", serde(rename = "_type"))]
    pub hand: HandType,
    /// Head direction.
    #[cfg_attr(feature = "serde", serde(rename = "_cutDirection"))]
    pub cut_direction: CutDirection,
    /// Tail time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_tailTime"))]
    pub tail_time: Beat,
    /// Tail column.
    #[cfg_attr(feature = "serde", serde(rename = "_tailLineIndex"))]
    pub tail_line_index: i32,
    /// Tail row.
    #[cfg_attr(feature = "serde", serde(rename = "_tailLineLayer"))]
    pub tail_line_layer: i32,
    /// Length of the head control point.
    #[cfg_attr(feature = "serde", serde(rename = "_headControlPointLengthMultiplier"))]
    pub head_control_point_length_multiplier: f64,
    /// Length of the tail control point.
    #[cfg_attr(feature = "serde", serde(rename = "_tailControlPointLengthMultiplier"))]
    pub tail_control_point_length_multiplier: f64,
    /// Tail direction.
    #[cfg_attr(feature = "serde", serde(rename = "_tailCutDirection"))]
    pub tail_cut_direction: CutDirection,
    /// How the middle of the arc bends.
    #[cfg_attr(feature = "serde", serde(rename = "_arcMidAnchorMode"))]
    pub arc_mid_anchor_mode: i32,
}

impl Slider {
    /// Exact position of the head.
    #[must_use]
    pub const fn head(&self) -> GridCoordinate {
        GridCoordinate {
            time: self.time,
            line_index: self.line_index,
            line_layer: self.line_layer,
        }
    }

    /// Exact position of the tail.
    #[must_use]
    pub const fn tail(&self) -> GridCoordinate {
        GridCoordinate {
            time: self.tail_time,
            line_index: self.tail_line_index,
            line_layer: self.tail_line_layer,
        }
    }
}

/// A head note followed by rapid slices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurstSlider {
    /// Head time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_time"))]
    pub time: Beat,
    /// Head column.
    #[cfg_attr(feature = "serde", serde(rename = "_lineIndex"))]
    pub line_index: i32,
    /// Head row.
    #[cfg_attr(feature = "serde", serde(rename = "_lineLayer"))]
    pub line_layer: i32,
    /// Color of the slices.
    #[cfg_attr(feature = "serde", serde(rename = "_type"))]
    pub hand: HandType,
    /// Head direction.
    #[cfg_attr(feature = "serde", serde(rename = "_cutDirection"))]
    pub cut_direction: CutDirection,
    /// Tail time in beats.
    #[cfg_attr(feature = "serde", serde(rename = "_tailTime"))]
    pub tail_time: Beat,
    /// Tail column.
    #[cfg_attr(feature = "serde", serde(rename = "_tailLineIndex"))]
    pub tail_line_index: i32,
    /// Tail row.
    #[cfg_attr(feature = "serde", serde(rename = "_tailLineLayer"))]
    pub tail_line_layer: i32,
    /// Number of segments including the head.
    #[cfg_attr(feature = "serde", serde(rename = "_sliceCount"))]
    pub slice_count: i32,
    /// Temporal compression of the slices.
    #[cfg_attr(feature = "serde", serde(rename = "_squishAmount"))]
    pub squish_amount: f64,
}

impl BurstSlider {
    /// Exact position of the head.
    #[must_use]
    pub const fn head(&self) -> GridCoordinate {
        GridCoordinate {
            time: self.time,
            line_index: self.line_index,
            line_layer: self.line_layer,
        }
    }

    /// Synthesizes the slices following the head, with `slice_index` from `1` to `slice_count - 1`.
    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        (1..self.slice_count.max(1) as u32).map(|slice_index| Chain::new(self, slice_index))
    }
}

/// A slice synthesized from a [`BurstSlider`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain {
    /// Copy of the originating burst slider, with [`CutDirection::Any`] as its direction.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub slider: BurstSlider,
    /// Direction of the originating burst slider, kept for display.
    #[cfg_attr(feature = "serde", serde(rename = "_headCutDirection"))]
    pub head_cut_direction: CutDirection,
    /// Always [`ScoringType::BurstSliderElement`].
    #[cfg_attr(feature = "serde", serde(rename = "_scoringType"))]
    pub scoring_type: ScoringType,
    /// Position among the siblings, starting from `1`.
    #[cfg_attr(feature = "serde", serde(rename = "_sliceIndex"))]
    pub slice_index: u32,
    /// Chronological rank among scorable objects.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_index", default, skip_serializing_if = "Option::is_none")
    )]
    pub index: Option<usize>,
}

impl Chain {
    /// Clones `slider` into a slice at `slice_index`.
    #[must_use]
    pub fn new(slider: &BurstSlider, slice_index: u32) -> Self {
        Self {
            slider: BurstSlider {
                cut_direction: CutDirection::Any,
                ..slider.clone()
            },
            head_cut_direction: slider.cut_direction,
            scoring_type: ScoringType::BurstSliderElement,
            slice_index,
            index: None,
        }
    }

    /// Time in beats, same as the head of the originating burst slider.
    #[must_use]
    pub const fn time(&self) -> Beat {
        self.slider.time
    }
}

/// A scorable object on the indexed timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineObject<'a> {
    /// A note from [`Beatmap::notes`].
    Note(&'a Note),
    /// A slice from [`Beatmap::chains`].
    Chain(&'a Chain),
}

impl TimelineObject<'_> {
    /// Time in beats.
    #[must_use]
    pub const fn time(&self) -> Beat {
        match self {
            Self::Note(note) => note.time,
            Self::Chain(chain) => chain.time(),
        }
    }

    /// Saber to hit this.
    #[must_use]
    pub const fn hand(&self) -> HandType {
        match self {
            Self::Note(note) => note.hand,
            Self::Chain(chain) => chain.slider.hand,
        }
    }

    /// Required swing direction.
    #[must_use]
    pub const fn cut_direction(&self) -> CutDirection {
        match self {
            Self::Note(note) => note.cut_direction,
            Self::Chain(chain) => chain.slider.cut_direction,
        }
    }

    /// Role in scoring.
    #[must_use]
    pub const fn scoring_type(&self) -> ScoringType {
        match self {
            Self::Note(note) => note.scoring_type,
            Self::Chain(chain) => chain.scoring_type,
        }
    }

    /// Assigned chronological rank.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Note(note) => note.index,
            Self::Chain(chain) => chain.index,
        }
    }
}
