use crate::{
    curve::SliderPath,
    model::{
        hit_object::{HitObject, HitObjectKind, PathControlPoint, Slider},
        pos::Pos,
    },
};

use super::{OsuObject, OsuObjectKind, OsuSlider, PLAYFIELD_BASE_SIZE};

/// Mirror an absolute position along the horizontal line at half the
/// bounds height.
pub fn mirror(pos: Pos, bounds_height: f32) -> Pos {
    Pos {
        x: pos.x,
        y: bounds_height - pos.y,
    }
}

/// Mirror a position that is relative to some origin, e.g. a slider's
/// control point.
pub fn mirror_local(pos: Pos) -> Pos {
    Pos { x: pos.x, y: -pos.y }
}

/// The HardRock mod's playfield transformation.
///
/// # Example
///
/// ```
/// use rosu_hardrock::{
///     model::{hit_object::{HitObject, HitObjectKind}, pos::Pos},
///     osu::HardRock,
/// };
///
/// let circle = HitObject {
///     pos: Pos::new(256.0, 0.0),
///     start_time: 0.0,
///     kind: HitObjectKind::Circle,
/// };
///
/// let mirrored = HardRock::new().apply_to_hit_object(&circle);
///
/// assert_eq!(mirrored.pos, Pos::new(256.0, 384.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HardRock {
    bounds_height: f32,
}

impl HardRock {
    pub const SCORE_MULTIPLIER: f64 = 1.06;
    pub const RANKED: bool = true;

    /// Mirror along the height of the osu!standard playfield.
    pub const fn new() -> Self {
        Self {
            bounds_height: PLAYFIELD_BASE_SIZE.y,
        }
    }

    /// Specify a custom height to mirror along.
    pub fn bounds_height(&mut self, bounds_height: f32) -> &mut Self {
        self.bounds_height = bounds_height;

        self
    }

    /// Mirror an [`OsuObject`].
    ///
    /// Sliders get their control points flipped and their nested objects
    /// derived anew from the resulting path.
    pub fn apply(&self, obj: &OsuObject) -> OsuObject {
        let pos = mirror(obj.pos, self.bounds_height);

        let kind = match obj.kind {
            OsuObjectKind::Circle => OsuObjectKind::Circle,
            OsuObjectKind::Spinner { end_time } => OsuObjectKind::Spinner { end_time },
            OsuObjectKind::Slider(ref slider) => {
                let control_points = mirror_control_points(slider.path.control_points());
                let path = SliderPath::new(control_points, slider.path.expected_dist());

                OsuObjectKind::Slider(OsuSlider::new(
                    pos,
                    obj.start_time,
                    slider.repeats,
                    path,
                    slider.timing(),
                ))
            }
        };

        OsuObject {
            pos,
            start_time: obj.start_time,
            kind,
        }
    }

    /// Mirror a decoded [`HitObject`].
    pub fn apply_to_hit_object(&self, h: &HitObject) -> HitObject {
        let kind = match h.kind {
            HitObjectKind::Slider(ref slider) => HitObjectKind::Slider(Slider {
                expected_dist: slider.expected_dist,
                repeats: slider.repeats,
                control_points: mirror_control_points(&slider.control_points),
            }),
            ref kind @ (HitObjectKind::Circle | HitObjectKind::Spinner(_)) => kind.clone(),
        };

        HitObject {
            pos: mirror(h.pos, self.bounds_height),
            start_time: h.start_time,
            kind,
        }
    }
}

impl Default for HardRock {
    fn default() -> Self {
        Self::new()
    }
}

fn mirror_control_points(control_points: &[PathControlPoint]) -> Vec<PathControlPoint> {
    control_points
        .iter()
        .map(|point| PathControlPoint {
            pos: mirror_local(point.pos),
            path_type: point.path_type,
        })
        .collect()
}
