/// Beatmap and its decoding.
pub mod beatmap;

/// Timing and difficulty points.
pub mod control_point;

/// Decoded hit objects.
pub mod hit_object;

/// Mod bitflags.
pub mod mods;

/// Two-dimensional positions.
pub mod pos;
