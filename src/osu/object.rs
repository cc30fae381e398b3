use std::slice::Iter;

use crate::{
    curve::SliderPath,
    model::{
        hit_object::{HitObject, HitObjectKind},
        pos::Pos,
    },
    Beatmap,
};

const LEGACY_LAST_TICK_OFFSET: f64 = 36.0;
const BASE_SCORING_DISTANCE: f64 = 100.0;

/// * A very lenient maximum length of a slider for ticks to be generated.
/// * This exists for edge cases such as /b/1573664 where the beatmap has
/// * been edited by the user, and should never be reached in normal usage.
const MAX_TICK_LEN: f64 = 100_000.0;

/// An osu!standard hit object with its final geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: OsuObjectKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OsuObjectKind {
    Circle,
    Slider(OsuSlider),
    Spinner { end_time: f64 },
}

impl OsuObject {
    /// Build the object, deriving nested slider objects w.r.t. the map's
    /// timing at the object's start time.
    pub fn new(h: &HitObject, map: &Beatmap) -> Self {
        let kind = match h.kind {
            HitObjectKind::Circle => OsuObjectKind::Circle,
            HitObjectKind::Slider(ref slider) => {
                let timing = SliderTiming::new(map, h.start_time);
                let path = SliderPath::new(slider.control_points.clone(), slider.expected_dist);

                OsuObjectKind::Slider(OsuSlider::new(
                    h.pos,
                    h.start_time,
                    slider.repeats,
                    path,
                    timing,
                ))
            }
            HitObjectKind::Spinner(spinner) => OsuObjectKind::Spinner {
                end_time: spinner.end_time,
            },
        };

        Self {
            pos: h.pos,
            start_time: h.start_time,
            kind,
        }
    }

    pub const fn end_time(&self) -> f64 {
        match self.kind {
            OsuObjectKind::Circle => self.start_time,
            OsuObjectKind::Slider(ref slider) => slider.end_time,
            OsuObjectKind::Spinner { end_time } => end_time,
        }
    }

    pub fn end_pos(&self) -> Pos {
        match self.kind {
            OsuObjectKind::Circle | OsuObjectKind::Spinner { .. } => self.pos,
            OsuObjectKind::Slider(ref slider) => slider.tail().map_or(self.pos, |tail| tail.pos),
        }
    }

    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Circle)
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Slider(_))
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Spinner { .. })
    }
}

/// Velocity and tick distance of a slider, both in osu!pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderTiming {
    /// Distance per millisecond.
    pub velocity: f64,
    /// Distance between two ticks, infinite if no ticks are generated.
    pub tick_dist: f64,
}

impl SliderTiming {
    /// Timing for a slider starting at `start_time` in the given map.
    pub fn new(map: &Beatmap, start_time: f64) -> Self {
        let timing_point = map.timing_point_at(start_time);
        let difficulty_point = map.difficulty_point_at(start_time);

        let scoring_dist = BASE_SCORING_DISTANCE * map.slider_mult * difficulty_point.slider_vel;
        let velocity = scoring_dist / timing_point.beat_len;

        // * prior to v8, speed multipliers don't adjust for how many ticks are generated over the same distance.
        // * this results in more (or less) ticks being generated in <v8 maps for the same time duration.
        let tick_dist_mult = if map.version < 8 {
            difficulty_point.slider_vel.recip()
        } else {
            1.0
        };

        let tick_dist = if difficulty_point.generate_ticks {
            scoring_dist / map.tick_rate * tick_dist_mult
        } else {
            f64::INFINITY
        };

        Self {
            velocity,
            tick_dist,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OsuSlider {
    pub end_time: f64,
    pub repeats: usize,
    pub path: SliderPath,
    timing: SliderTiming,
    /// Head, ticks, repeats, and tail; sorted by time.
    nested_objects: Vec<NestedObject>,
}

impl OsuSlider {
    /// Create a slider and derive its nested objects from the path.
    ///
    /// `pos` is the absolute position of the slider head, the path is
    /// relative to it.
    pub fn new(
        pos: Pos,
        start_time: f64,
        repeats: usize,
        path: SliderPath,
        timing: SliderTiming,
    ) -> Self {
        let span_count = (repeats + 1) as f64;
        let dist = path.dist();

        let span_duration = if timing.velocity > 0.0 {
            dist / timing.velocity
        } else {
            0.0
        };

        let end_time = start_time + span_count * span_duration;
        let total_duration = end_time - start_time;

        let len = dist.min(MAX_TICK_LEN);
        let tick_dist = timing.tick_dist.clamp(0.0, len);
        let min_dist_from_end = timing.velocity * 10.0;

        let mut nested_objects = vec![NestedObject {
            pos,
            start_time,
            kind: NestedObjectKind::Head,
        }];

        // (progress, time offset) of the first span's ticks
        let mut ticks = Vec::new();

        if tick_dist > 0.0 {
            let mut curr_dist = tick_dist;

            while curr_dist < len - min_dist_from_end {
                let progress = curr_dist / len;
                ticks.push((progress, progress * span_duration));
                curr_dist += tick_dist;
            }
        }

        for span_idx in 0..=repeats {
            let span_start = start_time + span_idx as f64 * span_duration;
            let reversed = span_idx % 2 == 1;

            if span_idx > 0 {
                let progress = if reversed { 1.0 } else { 0.0 };

                nested_objects.push(NestedObject {
                    pos: pos + path.position_at(progress),
                    start_time: span_start,
                    kind: NestedObjectKind::Repeat {
                        repeat_idx: span_idx - 1,
                    },
                });
            }

            let mut push_tick = |&(progress, offset): &(f64, f64)| {
                let offset = if reversed {
                    span_duration - offset
                } else {
                    offset
                };

                nested_objects.push(NestedObject {
                    pos: pos + path.position_at(progress),
                    start_time: span_start + offset,
                    kind: NestedObjectKind::Tick { span_idx },
                });
            };

            if reversed {
                ticks.iter().rev().for_each(&mut push_tick);
            } else {
                ticks.iter().for_each(&mut push_tick);
            }
        }

        // * we need to use the LegacyLastTick here for compatibility reasons (difficulty).
        let final_span_start_time = start_time + repeats as f64 * span_duration;
        let final_span_end_time = (start_time + total_duration / 2.0)
            .max(final_span_start_time + span_duration - LEGACY_LAST_TICK_OFFSET);

        let end_progress = if repeats % 2 == 0 { 1.0 } else { 0.0 };

        let tail = NestedObject {
            pos: pos + path.position_at(end_progress),
            start_time: final_span_end_time,
            kind: NestedObjectKind::Tail,
        };

        // On very short buzz sliders it can happen that the
        // legacy last tick is not the last object time-wise
        let tail_idx = nested_objects
            .iter()
            .rposition(|nested| nested.start_time <= final_span_end_time)
            .map_or(1, |idx| idx + 1);

        nested_objects.insert(tail_idx, tail);

        Self {
            end_time,
            repeats,
            path,
            timing,
            nested_objects,
        }
    }

    /// Velocity and tick distance the nested objects were derived with.
    pub const fn timing(&self) -> SliderTiming {
        self.timing
    }

    /// All nested objects sorted by time.
    pub fn nested_objects(&self) -> Iter<'_, NestedObject> {
        self.nested_objects.iter()
    }

    pub fn head(&self) -> Option<&NestedObject> {
        self.nested_objects
            .iter()
            .find(|nested| matches!(nested.kind, NestedObjectKind::Head))
    }

    pub fn tail(&self) -> Option<&NestedObject> {
        self.nested_objects
            .iter()
            .rev()
            .find(|nested| matches!(nested.kind, NestedObjectKind::Tail))
    }

    pub fn ticks(&self) -> impl Iterator<Item = &NestedObject> {
        self.nested_objects
            .iter()
            .filter(|nested| matches!(nested.kind, NestedObjectKind::Tick { .. }))
    }

    pub fn repeat_points(&self) -> impl Iterator<Item = &NestedObject> {
        self.nested_objects
            .iter()
            .filter(|nested| matches!(nested.kind, NestedObjectKind::Repeat { .. }))
    }

    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }
}

/// An object derived from a slider's path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NestedObject {
    /// Absolute position on the playfield.
    pub pos: Pos,
    pub start_time: f64,
    pub kind: NestedObjectKind,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NestedObjectKind {
    Head,
    Tick { span_idx: usize },
    Repeat { repeat_idx: usize },
    Tail,
}

#[cfg(test)]
mod tests {
    use crate::model::{
        control_point::TimingPoint,
        hit_object::{PathControlPoint, PathType, Slider, Spinner},
    };

    use super::*;

    fn map() -> Beatmap {
        Beatmap {
            slider_mult: 1.0,
            tick_rate: 1.0,
            timing_points: vec![TimingPoint::new(0.0, 1000.0)],
            ..Default::default()
        }
    }

    fn linear_slider(repeats: usize, len: f64) -> HitObject {
        HitObject {
            pos: Pos::new(100.0, 100.0),
            start_time: 1000.0,
            kind: HitObjectKind::Slider(Slider {
                expected_dist: Some(len),
                repeats,
                control_points: vec![
                    PathControlPoint::new(Pos::new(0.0, 0.0), Some(PathType::Linear)),
                    PathControlPoint::new(Pos::new(300.0, 0.0), None),
                ],
            }),
        }
    }

    fn nested(obj: &OsuObject) -> &OsuSlider {
        match obj.kind {
            OsuObjectKind::Slider(ref slider) => slider,
            _ => panic!("expected slider"),
        }
    }

    #[test]
    fn slider_timing() {
        let timing = SliderTiming::new(&map(), 0.0);

        // 100px per beat, 1000ms per beat
        assert!((timing.velocity - 0.1).abs() < 1e-12);
        assert!((timing.tick_dist - 100.0).abs() < 1e-12);
    }

    #[test]
    fn ticks_and_tail() {
        let obj = OsuObject::new(&linear_slider(0, 250.0), &map());
        let slider = nested(&obj);

        assert!((obj.end_time() - 3500.0).abs() < 1e-9);

        let ticks: Vec<_> = slider.ticks().map(|tick| tick.pos).collect();
        assert_eq!(ticks, vec![Pos::new(200.0, 100.0), Pos::new(300.0, 100.0)]);

        let head = slider.head().unwrap();
        assert_eq!(head.pos, obj.pos);
        assert!((head.start_time - 1000.0).abs() < f64::EPSILON);

        let tail = slider.tail().unwrap();
        assert_eq!(tail.pos, Pos::new(350.0, 100.0));
        assert!((tail.start_time - (3500.0 - LEGACY_LAST_TICK_OFFSET)).abs() < 1e-9);
        assert_eq!(obj.end_pos(), Pos::new(350.0, 100.0));
    }

    #[test]
    fn repeats_reverse_ticks() {
        let obj = OsuObject::new(&linear_slider(2, 250.0), &map());
        let slider = nested(&obj);

        let repeats: Vec<_> = slider.repeat_points().map(|r| (r.pos, r.start_time)).collect();

        assert_eq!(repeats.len(), 2);
        assert_eq!(repeats[0].0, Pos::new(350.0, 100.0));
        assert!((repeats[0].1 - 3500.0).abs() < 1e-9);
        assert_eq!(repeats[1].0, Pos::new(100.0, 100.0));
        assert!((repeats[1].1 - 6000.0).abs() < 1e-9);

        let second_span: Vec<_> = slider
            .ticks()
            .filter(|tick| tick.kind == NestedObjectKind::Tick { span_idx: 1 })
            .map(|tick| tick.pos)
            .collect();

        assert_eq!(second_span, vec![Pos::new(300.0, 100.0), Pos::new(200.0, 100.0)]);

        // even amount of repeats ends at the path's end
        assert_eq!(slider.tail().unwrap().pos, Pos::new(350.0, 100.0));

        let times: Vec<_> = slider.nested_objects().map(|n| n.start_time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn no_ticks_when_disabled() {
        let mut map = map();
        map.difficulty_points
            .push(crate::model::control_point::DifficultyPoint::new(0.0, f64::NAN));

        let obj = OsuObject::new(&linear_slider(0, 250.0), &map);

        assert_eq!(nested(&obj).ticks().count(), 0);
        assert_eq!(nested(&obj).nested_objects().count(), 2);
    }

    #[test]
    fn spinner_and_circle() {
        let spinner = HitObject {
            pos: Pos::new(256.0, 192.0),
            start_time: 500.0,
            kind: HitObjectKind::Spinner(Spinner { end_time: 1500.0 }),
        };

        let obj = OsuObject::new(&spinner, &map());
        assert!(obj.is_spinner());
        assert!((obj.end_time() - 1500.0).abs() < f64::EPSILON);

        let circle = HitObject {
            pos: Pos::new(1.0, 2.0),
            start_time: 500.0,
            kind: HitObjectKind::Circle,
        };

        let obj = OsuObject::new(&circle, &map());
        assert!(obj.is_circle());
        assert_eq!(obj.end_pos(), Pos::new(1.0, 2.0));
    }
}
