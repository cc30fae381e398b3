use std::cmp::Ordering;

use crate::model::{
    control_point::{DifficultyPoint, TimingPoint},
    hit_object::{HitObject, HitObjectKind, PathControlPoint, PathType, Slider, Spinner},
    pos::Pos,
};

use super::{Beatmap, ParseError, ParseResult};

const OSU_FILE_HEADER: &str = "osu file format v";

const MAX_COORDINATE_VALUE: i32 = 131_072;
const MAX_REPEAT_COUNT: i32 = 9000;

macro_rules! next_field {
    ($opt:expr, $name:literal) => {
        $opt.ok_or(ParseError::MissingField($name))?
    };
}

macro_rules! validate_float {
    ($x:expr) => {{
        let x = $x;

        if x.is_finite() {
            x
        } else {
            return Err(ParseError::InvalidFloatingPoint);
        }
    }};
}

macro_rules! sort {
    ($vec:expr) => {
        $vec.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    };
}

/// Line-based `.osu` decoder shared by all reader front-ends.
#[derive(Default)]
pub(crate) struct Decoder {
    map: Beatmap,
    /// `None` until the file header was read.
    version: Option<u8>,
    section: Section,
    offset: f64,

    ar: Option<f32>,

    unsorted_hits: bool,

    pending_time: f64,
    pending_timing_point: Option<TimingPoint>,
    pending_difficulty_point: Option<DifficultyPoint>,
}

impl Decoder {
    const CIRCLE_FLAG: u32 = 1 << 0;
    const SLIDER_FLAG: u32 = 1 << 1;
    const SPINNER_FLAG: u32 = 1 << 3;

    /// Process a single line.
    ///
    /// Only IO-independent fatal errors are returned, i.e. a missing file
    /// header or an unsupported mode. Any other faulty line is skipped.
    pub(crate) fn feed(&mut self, line: &str) -> ParseResult<()> {
        let line = line.trim_end();

        if self.version.is_none() {
            return self.read_header(line);
        }

        if skip_line(line) {
            return Ok(());
        }

        if line.starts_with('[') && line.ends_with(']') {
            self.section = Section::from_name(&line[1..line.len() - 1]);

            return Ok(());
        }

        let line = line.find("//").map_or(line, |idx| &line[..idx]);

        let res = match self.section {
            Section::General => self.read_general(line),
            Section::Difficulty => self.read_difficulty(line),
            Section::TimingPoints => self.read_timing_point(line),
            Section::HitObjects => self.read_hit_object(line),
            Section::None => Ok(()),
        };

        match res {
            Ok(()) => Ok(()),
            Err(err @ ParseError::UnsupportedMode(_)) => Err(err),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    section = ?self.section,
                    line,
                    error = %_err,
                    "skipping line while decoding beatmap"
                );

                Ok(())
            }
        }
    }

    /// Sort everything by time and hand out the map.
    pub(crate) fn finish(mut self) -> ParseResult<Beatmap> {
        self.flush_pending_points();

        let Self {
            mut map,
            version,
            ar,
            unsorted_hits,
            ..
        } = self;

        map.version = version.ok_or(ParseError::IncorrectFileHeader)?;

        // * AR defaults to OD on old maps
        map.ar = ar.unwrap_or(map.od);

        if unsorted_hits {
            sort!(map.hit_objects);
        }

        Ok(map)
    }

    /// Collect control points of the same time before adding them.
    ///
    /// Points of a timing change only fill empty slots while all others
    /// overwrite, so an inherited line always beats an uninherited line of
    /// the same time regardless of their order.
    fn add_pending_point<P: Pending>(&mut self, time: f64, point: P, timing_change: bool) {
        if (time - self.pending_time).abs() > f64::EPSILON {
            self.flush_pending_points();
        }

        let pending = P::pending(self);

        if !timing_change || pending.is_none() {
            *pending = Some(point);
        }

        self.pending_time = time;
    }

    fn flush_pending_points(&mut self) {
        if let Some(point) = self.pending_timing_point.take() {
            let points = &mut self.map.timing_points;

            match points.binary_search_by(|existing| existing.time.total_cmp(&point.time)) {
                Err(i) => points.insert(i, point),
                Ok(i) => points[i] = point,
            }
        }

        if let Some(point) = self.pending_difficulty_point.take() {
            let points = &mut self.map.difficulty_points;

            match points.binary_search_by(|existing| existing.time.total_cmp(&point.time)) {
                Err(i) => points.insert(i, point),
                Ok(i) => points[i] = point,
            }
        }
    }

    fn read_header(&mut self, line: &str) -> ParseResult<()> {
        let line = line.trim_start_matches('\u{feff}').trim();

        if line.is_empty() {
            return Ok(());
        }

        let idx = line
            .find(OSU_FILE_HEADER)
            .ok_or(ParseError::IncorrectFileHeader)?;

        let version = line[idx + OSU_FILE_HEADER.len()..].trim().parse()?;

        // * version 4 and lower had an incorrect offset (stable has this set as 24ms off)
        self.offset = if version < 5 { 24.0 } else { 0.0 };
        self.version = Some(version);

        Ok(())
    }

    fn read_general(&mut self, line: &str) -> ParseResult<()> {
        let (key, value) = split_colon(line).ok_or(ParseError::BadLine)?;

        if key == "Mode" {
            match value.parse::<u8>()? {
                0 => {}
                mode => return Err(ParseError::UnsupportedMode(mode)),
            }
        }

        Ok(())
    }

    fn read_difficulty(&mut self, line: &str) -> ParseResult<()> {
        let (key, value) = split_colon(line).ok_or(ParseError::BadLine)?;

        match key {
            "ApproachRate" => self.ar = Some(validate_float!(value.parse::<f32>()?)),
            "OverallDifficulty" => self.map.od = validate_float!(value.parse::<f32>()?),
            "CircleSize" => self.map.cs = validate_float!(value.parse::<f32>()?),
            "HPDrainRate" => self.map.hp = validate_float!(value.parse::<f32>()?),
            "SliderMultiplier" => {
                self.map.slider_mult = validate_float!(value.parse::<f64>()?).clamp(0.4, 3.6);
            }
            "SliderTickRate" => {
                self.map.tick_rate = validate_float!(value.parse::<f64>()?).clamp(0.5, 8.0);
            }
            _ => {}
        }

        Ok(())
    }

    fn read_timing_point(&mut self, line: &str) -> ParseResult<()> {
        let mut split = line.split(',').map(str::trim);

        let time = next_field!(split.next(), "time").parse::<f64>()?;
        let time = validate_float!(time) + self.offset;

        // NaN is valid and disables slider ticks
        let beat_len = next_field!(split.next(), "beat length").parse::<f64>()?;

        let timing_change = split
            .nth(4)
            .map_or(true, |field| matches!(field.chars().next(), Some('1')));

        if timing_change {
            let timing = TimingPoint::new(time, validate_float!(beat_len));
            self.add_pending_point(time, timing, timing_change);
        }

        // * a new timing section resets the slider velocity
        let difficulty = DifficultyPoint::new(time, beat_len);
        self.add_pending_point(time, difficulty, timing_change);

        Ok(())
    }

    fn read_hit_object(&mut self, line: &str) -> ParseResult<()> {
        let mut split = line.split(',');

        let pos = Pos {
            x: parse_coordinate(next_field!(split.next(), "x"))?,
            y: parse_coordinate(next_field!(split.next(), "y"))?,
        };

        let time = next_field!(split.next(), "start time").trim().parse::<f64>()?;
        let start_time = validate_float!(time) + self.offset;

        let flags: u32 = next_field!(split.next(), "type").trim().parse()?;

        // hitsound
        let _ = split.next();

        let kind = if flags & Self::CIRCLE_FLAG > 0 {
            HitObjectKind::Circle
        } else if flags & Self::SLIDER_FLAG > 0 {
            let curve = next_field!(split.next(), "curve points");
            let control_points = self.read_control_points(pos, curve)?;

            let slides: i32 = next_field!(split.next(), "slides").trim().parse()?;

            if slides > MAX_REPEAT_COUNT {
                return Err(ParseError::InvalidRepeatCount);
            }

            let expected_dist = split
                .next()
                .map(|len| len.trim().parse::<f64>())
                .transpose()?
                .filter(|len| len.is_finite() && *len > 0.0)
                .map(|len| len.min(f64::from(MAX_COORDINATE_VALUE)));

            HitObjectKind::Slider(Slider {
                expected_dist,
                repeats: usize::try_from(slides.saturating_sub(1)).unwrap_or(0),
                control_points,
            })
        } else if flags & Self::SPINNER_FLAG > 0 {
            let end_time = next_field!(split.next(), "end time").trim().parse::<f64>()?;
            let end_time = validate_float!(end_time) + self.offset;

            HitObjectKind::Spinner(Spinner {
                end_time: end_time.max(start_time),
            })
        } else {
            return Err(ParseError::UnknownHitObjectKind);
        };

        if self
            .map
            .hit_objects
            .last()
            .map_or(false, |prev| start_time < prev.start_time)
        {
            self.unsorted_hits = true;
        }

        self.map.hit_objects.push(HitObject {
            pos,
            start_time,
            kind,
        });

        Ok(())
    }

    /// Parse `B|x:y|x:y...` into control points relative to `pos`.
    fn read_control_points(&self, pos: Pos, curve: &str) -> ParseResult<Vec<PathControlPoint>> {
        let mut iter = curve.split('|');

        let mut path_type: PathType = next_field!(iter.next(), "path type").trim().parse()?;

        let mut absolute = Vec::with_capacity(8);
        absolute.push(pos);

        for point in iter {
            let mut coords = point.split(':');

            let (Some(x), Some(y)) = (coords.next(), coords.next()) else {
                return Err(ParseError::InvalidCurvePoints);
            };

            absolute.push(Pos {
                x: parse_coordinate(x)?,
                y: parse_coordinate(y)?,
            });
        }

        if absolute.len() < 2 {
            return Err(ParseError::InvalidCurvePoints);
        }

        if self.version.map_or(false, |version| version <= 6) {
            if path_type == PathType::Linear {
                path_type = PathType::Bezier;
            }

            if absolute.len() == 2 && absolute[0] == absolute[1] {
                path_type = PathType::Linear;
            }
        }

        let mut control_points = Vec::with_capacity(absolute.len());
        control_points.push(PathControlPoint::new(Pos::default(), Some(path_type)));

        for window in absolute.windows(2) {
            let (prev, curr) = (window[0], window[1]);

            // * a repeated point marks the start of a new segment
            if prev == curr {
                if let Some(last) = control_points.last_mut() {
                    last.path_type = Some(path_type);
                }

                continue;
            }

            control_points.push(PathControlPoint::new(curr - pos, None));
        }

        Ok(control_points)
    }
}

/// Parse a coordinate within the playable limits and truncate it to an integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_coordinate(s: &str) -> ParseResult<f32> {
    let value = validate_float!(s.trim().parse::<f32>()?);

    if value.abs() > MAX_COORDINATE_VALUE as f32 {
        return Err(ParseError::NumberOverflow);
    }

    Ok(value as i32 as f32)
}

fn skip_line(line: &str) -> bool {
    line.is_empty() || line.starts_with("//") || line.starts_with(' ') || line.starts_with('_')
}

fn split_colon(line: &str) -> Option<(&str, &str)> {
    let mut split = line.splitn(2, ':');

    Some((split.next()?.trim(), split.next()?.trim()))
}

trait Pending: Sized {
    fn pending(decoder: &mut Decoder) -> &mut Option<Self>;
}

impl Pending for TimingPoint {
    fn pending(decoder: &mut Decoder) -> &mut Option<Self> {
        &mut decoder.pending_timing_point
    }
}

impl Pending for DifficultyPoint {
    fn pending(decoder: &mut Decoder) -> &mut Option<Self> {
        &mut decoder.pending_difficulty_point
    }
}

#[derive(Copy, Clone, Debug, Default)]
enum Section {
    #[default]
    None,
    General,
    Difficulty,
    TimingPoints,
    HitObjects,
}

impl Section {
    fn from_name(name: &str) -> Self {
        match name {
            "General" => Self::General,
            "Difficulty" => Self::Difficulty,
            "TimingPoints" => Self::TimingPoints,
            "HitObjects" => Self::HitObjects,
            _ => Self::None,
        }
    }
}
