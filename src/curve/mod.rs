use crate::model::{
    hit_object::{PathControlPoint, PathType},
    pos::Pos,
};

mod math;

const BEZIER_TOLERANCE: f64 = 0.25;
const CATMULL_DETAIL: u16 = 50;

/// The path of a slider.
///
/// Control points are relative to the slider's position and so is every
/// position returned by the path.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderPath {
    control_points: Vec<PathControlPoint>,
    expected_dist: Option<f64>,
    path: Vec<Pos>,
    cumulative_len: Vec<f64>,
}

impl SliderPath {
    /// Approximate the path through the given control points.
    ///
    /// If an expected distance is given, the path is truncated or extended
    /// along its last segment to match it.
    pub fn new(control_points: Vec<PathControlPoint>, expected_dist: Option<f64>) -> Self {
        let path = calculate_path(&control_points);
        let mut curve = Self {
            control_points,
            expected_dist,
            path,
            cumulative_len: Vec::new(),
        };

        curve.calculate_len();

        curve
    }

    /// The control points the path was built from.
    pub fn control_points(&self) -> &[PathControlPoint] {
        &self.control_points
    }

    /// The distance that was specified for the path, if any.
    pub const fn expected_dist(&self) -> Option<f64> {
        self.expected_dist
    }

    /// The kind of the path's first segment.
    pub fn path_type(&self) -> Option<PathType> {
        self.control_points.first().and_then(|point| point.path_type)
    }

    /// The approximated vertices of the path.
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// The total length of the path.
    pub fn dist(&self) -> f64 {
        self.cumulative_len.last().copied().unwrap_or(0.0)
    }

    /// The position at the given progress, clamped to `0.0..=1.0`.
    pub fn position_at(&self, progress: f64) -> Pos {
        let d = progress.clamp(0.0, 1.0) * self.dist();
        let idx = self.cumulative_len.partition_point(|&len| len < d);

        match idx {
            _ if self.path.is_empty() => Pos::default(),
            0 => self.path[0],
            i if i >= self.path.len() => self.path[self.path.len() - 1],
            i => {
                let (start, end) = (self.path[i - 1], self.path[i]);
                let (d0, d1) = (self.cumulative_len[i - 1], self.cumulative_len[i]);

                if (d1 - d0).abs() <= f64::EPSILON {
                    return start;
                }

                let w = ((d - d0) / (d1 - d0)) as f32;

                start + (end - start) * w
            }
        }
    }

    fn calculate_len(&mut self) {
        self.cumulative_len.clear();
        self.cumulative_len.reserve(self.path.len());

        let mut calculated = 0.0;

        if !self.path.is_empty() {
            self.cumulative_len.push(0.0);
        }

        for window in self.path.windows(2) {
            calculated += f64::from(window[0].distance(window[1]));
            self.cumulative_len.push(calculated);
        }

        let expected = match self.expected_dist {
            Some(expected) if (expected - calculated).abs() > f64::EPSILON => expected,
            _ => return,
        };

        // Drop vertices that lie entirely beyond the expected distance
        while self.path.len() > 2 && self.cumulative_len[self.path.len() - 2] >= expected {
            self.path.pop();
            self.cumulative_len.pop();
        }

        let n = self.path.len();

        if n < 2 {
            return;
        }

        let (prev, last) = (self.path[n - 2], self.path[n - 1]);
        let segment_len = prev.distance(last);

        if segment_len <= f32::EPSILON {
            return;
        }

        let dir = (last - prev) / segment_len;
        let remaining = expected - self.cumulative_len[n - 2];

        self.path[n - 1] = prev + dir * remaining as f32;
        self.cumulative_len[n - 1] = expected;
    }
}

/// Split the control points into segments and approximate each of them.
fn calculate_path(control_points: &[PathControlPoint]) -> Vec<Pos> {
    let mut path = Vec::new();

    let Some(first) = control_points.first() else {
        return path;
    };

    let mut segment_type = first.path_type.unwrap_or(PathType::Linear);
    let mut start = 0;

    for i in 1..=control_points.len() {
        let end_of_segment = i == control_points.len() || control_points[i].path_type.is_some();

        if !end_of_segment {
            continue;
        }

        let end = i.min(control_points.len() - 1);
        let segment: Vec<Pos> = control_points[start..=end]
            .iter()
            .map(|point| point.pos)
            .collect();

        for vertex in approximate_segment(segment_type, &segment) {
            // The first vertex of a segment is the last of the previous one
            if path.last() != Some(&vertex) {
                path.push(vertex);
            }
        }

        if let Some(next_type) = control_points.get(i).and_then(|point| point.path_type) {
            segment_type = next_type;
        }

        start = i;
    }

    path
}

fn approximate_segment(kind: PathType, points: &[Pos]) -> Vec<Pos> {
    match kind {
        PathType::Linear => points.to_vec(),
        PathType::PerfectCurve => match points {
            [a, b, c] => math::approximate_circular_arc(*a, *b, *c)
                .unwrap_or_else(|| approximate_bezier(points)),
            _ => approximate_bezier(points),
        },
        PathType::Catmull => approximate_catmull(points),
        PathType::Bezier => approximate_bezier(points),
    }
}

fn approximate_bezier(points: &[Pos]) -> Vec<Pos> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let n = points.len() as i32 - 1;
    let step = (BEZIER_TOLERANCE / points.len() as f64).max(0.01);
    let steps = (1.0 / step).ceil() as usize;

    (0..=steps)
        .map(|i| {
            let t = (i as f64 * step).min(1.0);

            (0..).zip(points).fold(Pos::default(), |point, (p, curr)| {
                let factor = math::cpn(p, n) * (1.0 - t).powi(n - p) * t.powi(p);

                point + *curr * factor as f32
            })
        })
        .collect()
}

fn approximate_catmull(points: &[Pos]) -> Vec<Pos> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let order = points.len();
    let mut result = Vec::with_capacity((order - 1) * usize::from(CATMULL_DETAIL) + 1);

    for i in 0..order - 1 {
        let v1 = points[i.saturating_sub(1)];
        let v2 = points[i];
        let v3 = points[i + 1];

        let v4 = if i + 2 < order {
            points[i + 2]
        } else {
            v3 * 2.0 - v2
        };

        for c in 0..=CATMULL_DETAIL {
            let t = f32::from(c) / f32::from(CATMULL_DETAIL);

            result.push(Pos {
                x: math::catmull(v1.x, v2.x, v3.x, v4.x, t),
                y: math::catmull(v1.y, v2.y, v3.y, v4.y, t),
            });
        }
    }

    result
}
