use std::{error::Error as StdError, fmt};

use crate::{osu, osu::HitCounts, Beatmap, GameMode, Stats};

/// Caller-supplied summary of a play session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalculationOptions {
    /// Mod bits, see [`Mods`](crate::Mods).
    pub mods: u32,
    /// Accuracy percentage between 0 and 100.
    pub accuracy: f64,
    pub misses: u32,
    /// Highest combo of the play; reserved for the performance formula.
    pub combo: Option<u32>,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            mods: 0,
            accuracy: 100.0,
            misses: 0,
            combo: None,
        }
    }
}

/// Everything the engine derives for a play; the performance value itself
/// plugs in here once its formula lands.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    /// Difficulty stats with the mods applied.
    pub stats: Stats,
    pub hit_counts: HitCounts,
    pub max_combo: u32,
}

/// Anything that could go wrong while calculating play statistics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CalculateError {
    /// No calculator exists for the map's mode.
    UnsupportedMode(GameMode),
    /// The requested accuracy was outside `0..=100`.
    InvalidAccuracy(f64),
    /// At least as many misses as objects.
    InvalidMissCount { misses: u32, objects: u32 },
}

impl fmt::Display for CalculateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMode(mode) => {
                write!(f, "no calculator implemented for mode {:?}", mode)
            }
            Self::InvalidAccuracy(accuracy) => {
                write!(f, "accuracy `{}` is outside of 0..=100", accuracy)
            }
            Self::InvalidMissCount { misses, objects } => write!(
                f,
                "`{}` misses do not fit into `{}` objects",
                misses, objects
            ),
        }
    }
}

impl StdError for CalculateError {}

/// Calculate the play statistics for a beatmap.
///
/// Only implemented for [`GameMode::Osu`]; every other mode fails with
/// [`CalculateError::UnsupportedMode`].
pub fn calculate(
    map: &Beatmap,
    options: &CalculationOptions,
) -> Result<CalculationResult, CalculateError> {
    match map.mode {
        GameMode::Osu => osu::calculate(map, options),
        mode => Err(CalculateError::UnsupportedMode(mode)),
    }
}
