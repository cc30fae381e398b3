use crate::model::pos::Pos;

pub use self::{
    hard_rock::{mirror, mirror_local, HardRock},
    object::{NestedObject, NestedObjectKind, OsuObject, OsuObjectKind, OsuSlider, SliderTiming},
};

mod hard_rock;
mod object;

/// The size of the osu!standard playfield in osu!pixels.
pub const PLAYFIELD_BASE_SIZE: Pos = Pos::new(512.0, 384.0);
