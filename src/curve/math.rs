use std::f64::consts::PI;

use crate::model::pos::Pos;

const CIRCULAR_ARC_TOLERANCE: f64 = 0.1;

/// Binomial coefficient `n choose p`.
pub(crate) fn cpn(mut p: i32, n: i32) -> f64 {
    if p < 0 || p > n {
        return 0.0;
    }

    p = p.min(n - p);
    let mut out = 1.0;

    for i in 1..=p {
        out *= f64::from(n - p + i) / f64::from(i);
    }

    out
}

pub(crate) fn catmull(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Circle through three points.
struct CircularArc {
    center: (f64, f64),
    radius: f64,
    theta_start: f64,
    theta_range: f64,
    direction: f64,
}

impl CircularArc {
    /// `None` if the points are collinear or the arc is degenerate.
    fn new(a: Pos, b: Pos, c: Pos) -> Option<Self> {
        let (ax, ay) = (f64::from(a.x), f64::from(a.y));
        let (bx, by) = (f64::from(b.x), f64::from(b.y));
        let (cx, cy) = (f64::from(c.x), f64::from(c.y));

        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));

        if d.abs() < 1e-9 {
            return None;
        }

        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;

        let center_x = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let center_y = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;

        let (da_x, da_y) = (ax - center_x, ay - center_y);
        let (dc_x, dc_y) = (cx - center_x, cy - center_y);

        let radius = (da_x * da_x + da_y * da_y).sqrt();

        let theta_start = da_y.atan2(da_x);
        let mut theta_end = dc_y.atan2(dc_x);

        while theta_end < theta_start {
            theta_end += 2.0 * PI;
        }

        let mut direction = 1.0;
        let mut theta_range = theta_end - theta_start;

        // * decide in which direction to draw the circle, depending on which
        // * side of AC B lies
        let (ortho_x, ortho_y) = (cy - ay, -(cx - ax));

        if ortho_x * (bx - ax) + ortho_y * (by - ay) < 0.0 {
            direction = -direction;
            theta_range = 2.0 * PI - theta_range;
        }

        if !radius.is_finite() || !theta_range.is_finite() {
            return None;
        }

        Some(Self {
            center: (center_x, center_y),
            radius,
            theta_start,
            theta_range,
            direction,
        })
    }
}

/// Approximate the circular arc through `a`, `b`, and `c`.
///
/// Returns `None` if the points don't describe a proper arc.
pub(crate) fn approximate_circular_arc(a: Pos, b: Pos, c: Pos) -> Option<Vec<Pos>> {
    let arc = CircularArc::new(a, b, c)?;

    let amount_points = if 2.0 * arc.radius <= CIRCULAR_ARC_TOLERANCE {
        2
    } else {
        let step = 2.0 * (1.0 - CIRCULAR_ARC_TOLERANCE / arc.radius).acos();

        ((arc.theta_range / step).ceil() as usize).max(2)
    };

    let points = (0..amount_points)
        .map(|i| {
            let fract = i as f64 / (amount_points - 1) as f64;
            let theta = arc.theta_start + arc.direction * fract * arc.theta_range;

            Pos {
                x: (arc.center.0 + theta.cos() * arc.radius) as f32,
                y: (arc.center.1 + theta.sin() * arc.radius) as f32,
            }
        })
        .collect();

    Some(points)
}
