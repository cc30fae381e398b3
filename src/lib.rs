//! Library to decode [osu!] beatmaps, build osu!standard hit objects, and
//! apply the HardRock playfield mirror to them.
//!
//! ## Description
//!
//! HardRock flips the playfield vertically. Absolute positions such as a
//! circle's position or a slider's head, ticks, repeats, and tail are
//! mirrored along the playfield height while slider control points, which
//! are stored relative to the slider's position, only get their y-coordinate
//! negated.
//!
//! Nested slider objects are never flipped on their own. Instead, the
//! slider's path is rebuilt from the flipped control points and the nested
//! objects are derived from that path again so that both can't drift apart.
//!
//! ## Usage
//!
//! ```
//! use rosu_hardrock::{osu::HardRock, Beatmap, Mods};
//!
//! let bytes = b"osu file format v14
//!
//! [Difficulty]
//! SliderMultiplier:1.4
//! SliderTickRate:1
//!
//! [TimingPoints]
//! 0,500,4,2,0,100,1,0
//!
//! [HitObjects]
//! 256,0,1000,1,0,0:0:0:0:
//! 100,100,2000,2,0,L|200:100,1,100
//! ";
//!
//! let map = Beatmap::from_bytes(bytes).unwrap();
//!
//! // Build the objects and apply HR right away
//! let objects = map.osu_objects(u32::HR);
//!
//! assert_eq!(objects[0].pos.y, 384.0);
//!
//! // Or apply the mod manually with a custom playfield height
//! let flipped = HardRock::new().bounds_height(400.0).apply(&map.osu_objects(0)[0]);
//!
//! assert_eq!(flipped.pos.y, 400.0);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `async_tokio` | Beatmap parsing will be async through [tokio] | [`tokio`]
//! | `async_std` | Beatmap parsing will be async through [async-std] | [`async-std`]
//! | `tracing` | Any line skipped during beatmap decoding will be logged through `tracing::warn`. If this feature is not enabled, those lines will be ignored silently. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [tokio]: https://github.com/tokio-rs/tokio
//! [async-std]: https://github.com/async-rs/async-std
//! [`tokio`]: https://docs.rs/tokio
//! [`async-std`]: https://docs.rs/async-std
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::similar_names
)]

#[cfg(all(feature = "async_tokio", feature = "async_std"))]
compile_error!("the features `async_tokio` and `async_std` are mutually exclusive");

#[doc(inline)]
pub use self::model::{
    beatmap::{Beatmap, ParseError, ParseResult},
    mods::Mods,
};

/// Types for osu!standard objects and the HardRock mod.
pub mod osu;

/// Slider paths and their approximation.
pub mod curve;

/// Types used in and around this crate.
pub mod model;
