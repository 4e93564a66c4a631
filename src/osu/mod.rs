//! osu!standard calculations: maximum combo and hit-count reconstruction.

use crate::{
    calculate::{CalculateError, CalculationOptions, CalculationResult},
    Beatmap, GameMode, HitObjectKind, SliderCurve, TimingPoint,
};

/// A full 300/100/50/miss breakdown of a play.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct HitCounts {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
}

/// Reconstruct a hit-count breakdown from an accuracy percentage.
///
/// The accuracy is clamped into the achievable range, never rejected;
/// `misses` must stay below `object_count`. The four resulting counts
/// always sum to `object_count`.
///
/// The breakdown first tries to express the accuracy through 100s alone.
/// When that would take more partial hits than non-miss objects exist,
/// it is expressed through 50s instead, using the unclamped request.
pub fn reconstruct_hit_counts(
    accuracy: f64,
    misses: u32,
    object_count: u32,
) -> Result<HitCounts, CalculateError> {
    if misses >= object_count {
        return Err(CalculateError::InvalidMissCount {
            misses,
            objects: object_count,
        });
    }

    let max300 = object_count - misses;
    let max_acc = f64::from(object_count) / f64::from(max300) * 100.0;
    let acc = accuracy.max(0.0).min(max_acc);

    let objects = f64::from(object_count);
    let n100 = (-3.0 * ((acc * 0.01 - 1.0) * objects + f64::from(misses)) * 0.5).round() as i64;

    if n100 > i64::from(max300) {
        // more 100s than available objects: the accuracy sits below an
        // all-100 score, express it through 50s from the unclamped request
        let n50 =
            (-6.0 * ((accuracy * 0.01 - 1.0) * objects + f64::from(misses)) * 0.5).round() as i64;
        let n50 = n50.max(0).min(i64::from(max300)) as u32;

        Ok(HitCounts {
            n300: max300 - n50,
            n100: 0,
            n50,
            misses,
        })
    } else {
        // an infeasible accuracy request would push the count negative
        let n100 = n100.max(0) as u32;

        Ok(HitCounts {
            n300: max300 - n100,
            n100,
            n50: 0,
            misses,
        })
    }
}

/// Maximum combo achievable on an osu!standard map.
///
/// Fails with [`CalculateError::UnsupportedMode`] for any other mode.
pub fn max_combo(map: &Beatmap) -> Result<u32, CalculateError> {
    if map.mode != GameMode::Osu {
        return Err(CalculateError::UnsupportedMode(map.mode));
    }

    Ok(max_combo_total(map))
}

fn max_combo_total(map: &Beatmap) -> u32 {
    let sliders: u32 = map
        .hit_objects
        .iter()
        .filter_map(|object| match &object.kind {
            HitObjectKind::Slider { curve, .. } => {
                Some(slider_combo(curve, object.start_time, map))
            }
            _ => None,
        })
        .sum();

    sliders + map.object_counts.circles + map.object_counts.spinners
}

/// Slider velocity multiplier of the timing point governing `time`: the
/// point right before the first point that lies strictly after `time`.
/// Without such a pair the multiplier is 0.
fn slider_velocity_multiplier(time: i32, timing_points: &[TimingPoint]) -> f64 {
    let next = timing_points.iter().position(|point| point.time > time);

    let governing = match next {
        Some(idx) if idx > 0 => &timing_points[idx - 1],
        _ => return 0.0,
    };

    if governing.inherited && governing.beat_length < 0.0 {
        -100.0 / governing.beat_length
    } else {
        1.0
    }
}

fn slider_combo(curve: &SliderCurve, start_time: i32, map: &Beatmap) -> u32 {
    // formats below v8 carry no usable slider velocity
    let velocity = if map.version >= 8 {
        slider_velocity_multiplier(start_time, &map.timing_points)
    } else {
        0.0
    };

    let pixels_per_beat = map.stats.slider_multiplier * 100.0 * velocity;
    let repetitions = f64::from(curve.repetitions);
    let beats = curve.length * repetitions / pixels_per_beat;

    // zero velocity leaves the beat count undefined; such a slider
    // contributes nothing
    if !beats.is_finite() {
        return 0;
    }

    // subtract an epsilon to prevent accidental ceiling of whole values
    // such as 2.00....1 -> 3 due to rounding errors
    const EPSILON: f64 = 0.01;

    let ticks = ((beats - EPSILON) / repetitions * map.stats.slider_tick_rate - 1.0).ceil();
    let combo = ticks * repetitions + repetitions + 1.0;

    combo.max(0.0) as u32
}

pub(crate) fn calculate(
    map: &Beatmap,
    options: &CalculationOptions,
) -> Result<CalculationResult, CalculateError> {
    if !(0.0..=100.0).contains(&options.accuracy) {
        return Err(CalculateError::InvalidAccuracy(options.accuracy));
    }

    let stats = map.stats.mods(options.mods);
    let hit_counts = reconstruct_hit_counts(
        options.accuracy,
        options.misses,
        map.object_counts.scorable(),
    )?;

    Ok(CalculationResult {
        stats,
        hit_counts,
        max_combo: max_combo_total(map),
    })
}
