//! Library to parse `.osu` beatmaps and derive play statistics from score
//! summaries: mod-adjusted difficulty stats, reconstructed hit counts, and
//! the maximum achievable combo.
//!
//! Parsing turns the line-oriented, section-structured beatmap text into an
//! immutable [`Beatmap`] model; the calculation side consumes that model
//! together with [`CalculationOptions`]. The performance-point formula
//! itself is not part of this crate — [`calculate`] is the seam it will
//! plug into and currently returns the derived statistics only.
//!
//! ## Usage
//!
//! ```
//! use ezpp::{calculate, Beatmap, CalculationOptions, Mods};
//!
//! let text = "osu file format v14
//!
//! [General]
//! AudioFilename: audio.mp3
//! Mode: 0
//!
//! [Metadata]
//! Title: Short example
//! BeatmapID: 42
//!
//! [Difficulty]
//! HPDrainRate: 5
//! CircleSize: 4
//! OverallDifficulty: 7
//! SliderMultiplier: 1.4
//! SliderTickRate: 1
//!
//! [TimingPoints]
//! 0,500,4,2,0,100,1,0
//!
//! [HitObjects]
//! 100,100,500,1,0
//! 200,100,1000,1,0
//! ";
//!
//! let map = Beatmap::parse(text).unwrap();
//! assert_eq!(map.version, 14);
//! // maps without an ApproachRate fall back to their OverallDifficulty
//! assert!((map.stats.ar - 7.0).abs() < f32::EPSILON);
//!
//! let options = CalculationOptions {
//!     mods: u32::HR,
//!     accuracy: 98.5,
//!     ..CalculationOptions::default()
//! };
//!
//! let result = calculate(&map, &options).unwrap();
//!
//! assert_eq!(result.max_combo, 2);
//! assert!((result.stats.cs - 5.2).abs() < 1e-4);
//! ```
//!
//! ## Features
//!
//! | Flag | Description |
//! | - | - |
//! | `tracing` | Sliders that degrade to invalid objects during parsing are logged through `tracing::warn`. |

#![deny(rustdoc::broken_intra_doc_links)]

mod calculate;
mod mods;
mod parse;

/// osu!standard calculations.
pub mod osu;

pub use calculate::{calculate, CalculateError, CalculationOptions, CalculationResult};
pub use mods::Mods;
pub use osu::HitCounts;
pub use parse::{
    Beatmap, GameMode, GeneralInfo, HitObject, HitObjectKind, MetadataInfo, ObjectCounts,
    ParseError, ParseResult, PathType, Pos2, SliderCurve, Stats, TimingPoint,
};
