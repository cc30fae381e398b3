use std::{cmp::Ordering, str::FromStr};

use super::{beatmap::ParseError, pos::Pos};

/// "Intermediate" hitobject created through decoding.
///
/// For osu!standard specific data such as nested slider objects,
/// see [`OsuObject`](crate::osu::OsuObject).
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner(_))
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
}

/// A slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    /// The length of the slider as specified in the `.osu` file.
    pub expected_dist: Option<f64>,
    pub repeats: usize,
    /// Control points relative to the slider's position.
    pub control_points: Vec<PathControlPoint>,
}

impl Slider {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub end_time: f64,
}

/// A control point of a slider's path.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PathControlPoint {
    /// Offset to the slider's position.
    pub pos: Pos,
    /// If specified, a new segment of the given kind starts at this point.
    pub path_type: Option<PathType>,
}

impl PathControlPoint {
    /// Create a new control point.
    pub const fn new(pos: Pos, path_type: Option<PathType>) -> Self {
        Self { pos, path_type }
    }
}

/// The kind of a slider path segment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PathType {
    Catmull,
    Bezier,
    Linear,
    PerfectCurve,
}

impl FromStr for PathType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Linear),
            "C" => Ok(Self::Catmull),
            "B" => Ok(Self::Bezier),
            "P" => Ok(Self::PerfectCurve),
            _ => Err(ParseError::InvalidPathType),
        }
    }
}
