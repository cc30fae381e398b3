use std::cmp::Ordering;

/// New rhythm speed change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingPoint {
    /// The start time of this timing section
    pub time: f64,
    /// The beat length for this timing section
    pub beat_len: f64,
}

impl TimingPoint {
    pub const DEFAULT_BEAT_LEN: f64 = 60_000.0 / 60.0;

    /// Create a new [`TimingPoint`], clamping the beat length.
    pub fn new(time: f64, beat_len: f64) -> Self {
        Self {
            time,
            beat_len: beat_len.clamp(6.0, 60_000.0),
        }
    }
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            beat_len: Self::DEFAULT_BEAT_LEN,
        }
    }
}

impl PartialOrd for TimingPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.time.partial_cmp(&other.time)
    }
}

/// [`TimingPoint`] that depends on a previous one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyPoint {
    /// The time at which the control point takes effect.
    pub time: f64,
    /// The slider velocity at this control point.
    pub slider_vel: f64,
    /// Whether or not slider ticks should be generated at this control point.
    /// Maps abusing NaN slider velocities on osu!stable get no ticks.
    pub generate_ticks: bool,
}

impl DifficultyPoint {
    pub const DEFAULT_SLIDER_VEL: f64 = 1.0;

    /// Create a new [`DifficultyPoint`] from the raw negative beat length of
    /// an inherited timing line.
    pub fn new(time: f64, beat_len: f64) -> Self {
        let slider_vel = if beat_len < 0.0 {
            -100.0 / beat_len
        } else {
            Self::DEFAULT_SLIDER_VEL
        };

        Self {
            time,
            slider_vel: slider_vel.clamp(0.1, 10.0),
            generate_ticks: !beat_len.is_nan(),
        }
    }
}

impl Default for DifficultyPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            slider_vel: Self::DEFAULT_SLIDER_VEL,
            generate_ticks: true,
        }
    }
}

impl PartialOrd for DifficultyPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.time.partial_cmp(&other.time)
    }
}

/// The timing point that is active at the given time.
///
/// Times before the first timing point use the first one.
pub fn timing_point_at(points: &[TimingPoint], time: f64) -> Option<&TimingPoint> {
    let idx = points.partition_point(|point| point.time <= time);

    idx.checked_sub(1)
        .and_then(|i| points.get(i))
        .or_else(|| points.first())
}

/// The difficulty point that is active at the given time, if any.
pub fn difficulty_point_at(points: &[DifficultyPoint], time: f64) -> Option<&DifficultyPoint> {
    let idx = points.partition_point(|point| point.time <= time);

    idx.checked_sub(1).and_then(|i| points.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_point_lookup() {
        let points = [TimingPoint::new(100.0, 500.0), TimingPoint::new(1000.0, 250.0)];

        assert_eq!(timing_point_at(&points, 0.0), Some(&points[0]));
        assert_eq!(timing_point_at(&points, 100.0), Some(&points[0]));
        assert_eq!(timing_point_at(&points, 999.0), Some(&points[0]));
        assert_eq!(timing_point_at(&points, 1000.0), Some(&points[1]));
        assert_eq!(timing_point_at(&[], 1000.0), None);
    }

    #[test]
    fn difficulty_point_lookup() {
        let points = [
            DifficultyPoint::new(100.0, -50.0),
            DifficultyPoint::new(1000.0, -200.0),
        ];

        assert_eq!(difficulty_point_at(&points, 0.0), None);
        assert_eq!(difficulty_point_at(&points, 500.0), Some(&points[0]));
        assert!((points[0].slider_vel - 2.0).abs() < f64::EPSILON);
        assert!((points[1].slider_vel - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn nan_disables_ticks() {
        let point = DifficultyPoint::new(0.0, f64::NAN);

        assert!(!point.generate_ticks);
        assert!((point.slider_vel - DifficultyPoint::DEFAULT_SLIDER_VEL).abs() < f64::EPSILON);
    }
}
