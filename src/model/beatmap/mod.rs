use std::path::Path;

use crate::{
    model::{
        control_point::{difficulty_point_at, timing_point_at, DifficultyPoint, TimingPoint},
        hit_object::HitObject,
        mods::{Mods, Reflection},
    },
    osu::{HardRock, OsuObject},
};

use self::{decode::Decoder, reader::FileReader};

pub use self::{
    attributes::{BeatmapAttributes, BeatmapAttributesBuilder},
    error::{ParseError, ParseResult},
};

mod attributes;
mod decode;
mod error;
mod reader;

/// All beatmap data that is relevant for building osu!standard objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    /// The version of the .osu file.
    pub version: u8,

    /// The approach rate.
    pub ar: f32,
    /// The overall difficulty.
    pub od: f32,
    /// The circle size.
    pub cs: f32,
    /// The health drain rate.
    pub hp: f32,
    /// Base slider velocity in pixels per beat.
    pub slider_mult: f64,
    /// Amount of slider ticks per beat.
    pub tick_rate: f64,

    /// All hitobjects of the beatmap.
    pub hit_objects: Vec<HitObject>,
    /// Timing points that indicate a new timing section.
    pub timing_points: Vec<TimingPoint>,
    /// Slider velocity changes.
    pub difficulty_points: Vec<DifficultyPoint>,
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            version: 14,
            ar: 5.0,
            od: 5.0,
            cs: 5.0,
            hp: 5.0,
            slider_mult: 1.4,
            tick_rate: 1.0,
            hit_objects: Vec::new(),
            timing_points: Vec::new(),
            difficulty_points: Vec::new(),
        }
    }
}

impl Beatmap {
    /// Decode a beatmap from the content of a `.osu` file.
    ///
    /// Always synchronous, independent of the enabled features.
    pub fn from_bytes(bytes: &[u8]) -> ParseResult<Self> {
        let mut decoder = Decoder::default();

        for line in bytes.split(|&byte| byte == b'\n') {
            decoder.feed(&String::from_utf8_lossy(line))?;
        }

        decoder.finish()
    }

    /// Decode a beatmap from a reader.
    #[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
    pub fn parse<R: std::io::Read>(src: R) -> ParseResult<Self> {
        let mut reader = FileReader::new(src);
        let mut decoder = Decoder::default();

        while reader.next_line()? != 0 {
            decoder.feed(&reader.line())?;
        }

        decoder.finish()
    }

    /// Decode a beatmap from a reader.
    #[cfg(feature = "async_tokio")]
    pub async fn parse<R: tokio::io::AsyncRead + Unpin>(src: R) -> ParseResult<Self> {
        let mut reader = FileReader::new(src);
        let mut decoder = Decoder::default();

        while reader.next_line().await? != 0 {
            decoder.feed(&reader.line())?;
        }

        decoder.finish()
    }

    /// Decode a beatmap from a reader.
    #[cfg(feature = "async_std")]
    pub async fn parse<R: async_std::io::Read + Unpin>(src: R) -> ParseResult<Self> {
        let mut reader = FileReader::new(src);
        let mut decoder = Decoder::default();

        while reader.next_line().await? != 0 {
            decoder.feed(&reader.line())?;
        }

        decoder.finish()
    }

    /// Read and decode a `.osu` file.
    #[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> ParseResult<Self> {
        std::fs::File::open(path)
            .map_err(ParseError::from)
            .and_then(Self::parse)
    }

    /// Read and decode a `.osu` file.
    #[cfg(feature = "async_tokio")]
    pub async fn from_path<P: AsRef<Path>>(path: P) -> ParseResult<Self> {
        let file = tokio::fs::File::open(path).await?;

        Self::parse(file).await
    }

    /// Read and decode a `.osu` file.
    #[cfg(feature = "async_std")]
    pub async fn from_path<P: AsRef<Path>>(path: P) -> ParseResult<Self> {
        let file = async_std::fs::File::open(path.as_ref()).await?;

        Self::parse(file).await
    }

    /// The amount of circles.
    pub fn n_circles(&self) -> usize {
        self.hit_objects.iter().filter(|h| h.is_circle()).count()
    }

    /// The amount of sliders.
    pub fn n_sliders(&self) -> usize {
        self.hit_objects.iter().filter(|h| h.is_slider()).count()
    }

    /// The amount of spinners.
    pub fn n_spinners(&self) -> usize {
        self.hit_objects.iter().filter(|h| h.is_spinner()).count()
    }

    /// The timing point active at the given time.
    pub fn timing_point_at(&self, time: f64) -> TimingPoint {
        timing_point_at(&self.timing_points, time)
            .copied()
            .unwrap_or_default()
    }

    /// The difficulty point active at the given time.
    pub fn difficulty_point_at(&self, time: f64) -> DifficultyPoint {
        difficulty_point_at(&self.difficulty_points, time)
            .copied()
            .unwrap_or_default()
    }

    /// Builder for the map's attributes adjusted by mods.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new(self)
    }

    /// Build osu!standard objects for all hitobjects.
    ///
    /// If the mods contain HardRock, the playfield is mirrored after each
    /// object's geometry is complete.
    pub fn osu_objects(&self, mods: u32) -> Vec<OsuObject> {
        let hard_rock = match mods.reflection() {
            Reflection::Vertical => Some(HardRock::new()),
            Reflection::None => None,
        };

        self.hit_objects
            .iter()
            .map(|h| {
                let obj = OsuObject::new(h, self);

                match hard_rock {
                    Some(ref hr) => hr.apply(&obj),
                    None => obj,
                }
            })
            .collect()
    }
}
