//! Enumerations of the numeric codes stored on beatmap objects.

use thiserror::Error;

/// Error on converting an unknown numeric code into one of the enumerations in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("unknown {kind} code: {code}")]
pub struct TryFromCodeError {
    /// Name of the enumeration which rejected the code.
    pub kind: &'static str,
    /// The rejected code.
    pub code: i32,
}

/// Which saber has to hit the object, stored as `_type` on notes.
///
/// Only [`HandType::Left`] and [`HandType::Right`] are playable. Every other code is kept as [`HandType::Bomb`], so that a legacy bomb (`3`) and a migrated one (`2`) both survive serialization as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
pub enum HandType {
    /// Color A, code `0`.
    Left,
    /// Color B, code `1`.
    Right,
    /// Not hit by any saber. Holds the raw code.
    Bomb(i32),
}

impl HandType {
    /// The sentinel code given to bombs migrated from the versioned format.
    pub const BOMB: Self = Self::Bomb(2);

    /// Whether a player scores on this object.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<i32> for HandType {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Left,
            1 => Self::Right,
            other => Self::Bomb(other),
        }
    }
}

impl From<HandType> for i32 {
    fn from(value: HandType) -> Self {
        match value {
            HandType::Left => 0,
            HandType::Right => 1,
            HandType::Bomb(code) => code,
        }
    }
}

/// Direction to swing a saber through a note, stored as `_cutDirection`.
///
/// Codes outside `0..=9`, such as the precision directions of modded maps, are kept as [`CutDirection::Other`]. Equality and ordering compare the numeric codes.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
pub enum CutDirection {
    /// Code `0`.
    Up,
    /// Code `1`.
    Down,
    /// Code `2`.
    Left,
    /// Code `3`.
    Right,
    /// Code `4`.
    UpLeft,
    /// Code `5`.
    UpRight,
    /// Code `6`.
    DownLeft,
    /// Code `7`.
    DownRight,
    /// Code `8`, the dot note. Any swing direction is accepted.
    Any,
    /// Code `9`, no direction at all. Given to bombs.
    None,
    /// An unknown code, kept as is. It has no swing direction like [`CutDirection::None`].
    Other(i32),
}

impl CutDirection {
    /// All known directions in code order.
    pub const ALL: [Self; 10] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::Any,
        Self::None,
    ];

    /// Numeric code of the direction.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::UpLeft => 4,
            Self::UpRight => 5,
            Self::DownLeft => 6,
            Self::DownRight => 7,
            Self::Any => 8,
            Self::None => 9,
            Self::Other(code) => code,
        }
    }

    /// Whether this is a wildcard direction.
    #[must_use]
    pub const fn is_any(self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether the code is greater than the one of [`CutDirection::Right`], that is the diagonals, the non-directional ones and unknown codes above them.
    #[must_use]
    pub const fn is_past_right(self) -> bool {
        self.code() > Self::Right.code()
    }
}

impl PartialEq for CutDirection {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for CutDirection {}

impl PartialOrd for CutDirection {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CutDirection {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code().cmp(&other.code())
    }
}

impl std::hash::Hash for CutDirection {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<i32> for CutDirection {
    fn from(value: i32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(Self::Other(value))
    }
}

impl From<CutDirection> for i32 {
    fn from(value: CutDirection) -> Self {
        value.code()
    }
}

/// How an object contributes to the score, stored as `_scoringType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub enum ScoringType {
    /// Code `-1`.
    Ignore,
    /// Code `0`. Bombs.
    NoScore,
    /// Code `1`. Every playable note starts with this.
    Normal,
    /// Code `2`. The note where a slider starts.
    SliderHead,
    /// Code `3`. The note where a slider ends.
    SliderTail,
    /// Code `4`. The note where a burst slider starts.
    BurstSliderHead,
    /// Code `5`. A synthesized slice of a burst slider.
    BurstSliderElement,
}

impl ScoringType {
    /// Whether the type is still the initial one, so that it may be promoted to a slider role.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl TryFrom<i32> for ScoringType {
    type Error = TryFromCodeError;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            -1 => Self::Ignore,
            0 => Self::NoScore,
            1 => Self::Normal,
            2 => Self::SliderHead,
            3 => Self::SliderTail,
            4 => Self::BurstSliderHead,
            5 => Self::BurstSliderElement,
            code => {
                return Err(TryFromCodeError {
                    kind: "scoring type",
                    code,
                });
            }
        })
    }
}

impl From<ScoringType> for i32 {
    fn from(value: ScoringType) -> Self {
        match value {
            ScoringType::Ignore => -1,
            ScoringType::NoScore => 0,
            ScoringType::Normal => 1,
            ScoringType::SliderHead => 2,
            ScoringType::SliderTail => 3,
            ScoringType::BurstSliderHead => 4,
            ScoringType::BurstSliderElement => 5,
        }
    }
}

/// Shape of an obstacle, derived from its `_type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Type `0`, a wall from the floor to the ceiling.
    FullHeight,
    /// Type `1`, a ceiling to duck under.
    Crouch,
    /// Any other type, kept as is.
    Other(f64),
}

impl From<f64> for ObstacleKind {
    fn from(value: f64) -> Self {
        match value {
            0.0 => Self::FullHeight,
            1.0 => Self::Crouch,
            other => Self::Other(other),
        }
    }
}
