use super::{ParseError, ParseResult};
use crate::Mods;

/// Difficulty settings of the `[Difficulty]` section.
///
/// All fields default to `-1` when absent. A negative `ar` after decoding is
/// backfilled with `od` once, right after parsing (old formats did not store
/// an approach rate).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stats {
    pub hp: f32,
    pub cs: f32,
    pub od: f32,
    pub ar: f32,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hp: -1.0,
            cs: -1.0,
            od: -1.0,
            ar: -1.0,
            slider_multiplier: -1.0,
            slider_tick_rate: -1.0,
        }
    }
}

impl Stats {
    const AR0_MS: f32 = 1800.0;
    const AR5_MS: f32 = 1200.0;
    const AR10_MS: f32 = 450.0;
    const AR_MS_STEP_1: f32 = (Self::AR0_MS - Self::AR5_MS) / 5.0;
    const AR_MS_STEP_2: f32 = (Self::AR5_MS - Self::AR10_MS) / 5.0;

    const OD0_MS: f32 = 80.0;
    const OD10_MS: f32 = 20.0;
    const OD_MS_STEP: f32 = (Self::OD0_MS - Self::OD10_MS) / 10.0;

    pub(crate) fn set(&mut self, key: &str, value: &str) -> ParseResult<()> {
        match key {
            "HPDrainRate" => self.hp = value.parse()?,
            "CircleSize" => self.cs = value.parse()?,
            "OverallDifficulty" => self.od = value.parse()?,
            "ApproachRate" => self.ar = value.parse()?,
            "SliderMultiplier" => self.slider_multiplier = value.parse()?,
            "SliderTickRate" => self.slider_tick_rate = value.parse()?,
            _ => return Err(ParseError::UnknownKey(key.to_owned())),
        }

        Ok(())
    }

    /// Adjusts the stats w.r.t. mods.
    ///
    /// AR and OD are adjusted through their hit windows in milliseconds;
    /// the OD window is rounded up on the forward conversion, the AR window
    /// is not. Outputs are not re-clamped to the nominal 0-10 range, so
    /// extreme mod/base combinations may land outside of it.
    pub fn mods(self, mods: impl Mods) -> Self {
        if !mods.change_map() {
            return self;
        }

        let speed = mods.speed();
        let multiplier = mods.od_ar_hp_multiplier();

        // AR
        let mut ar = self.ar * multiplier;
        let mut ar_ms = if ar < 5.0 {
            Self::AR0_MS - Self::AR_MS_STEP_1 * ar
        } else {
            Self::AR5_MS - Self::AR_MS_STEP_2 * (ar - 5.0)
        };

        ar_ms = ar_ms.max(Self::AR10_MS).min(Self::AR0_MS);
        ar_ms /= speed;

        ar = if ar_ms > Self::AR5_MS {
            (Self::AR0_MS - ar_ms) / Self::AR_MS_STEP_1
        } else {
            5.0 + (Self::AR5_MS - ar_ms) / Self::AR_MS_STEP_2
        };

        // OD
        let od = self.od * multiplier;
        let mut od_ms = Self::OD0_MS - (Self::OD_MS_STEP * od).ceil();
        od_ms = od_ms.max(Self::OD10_MS).min(Self::OD0_MS);
        od_ms /= speed;
        let od = (Self::OD0_MS - od_ms) / Self::OD_MS_STEP;

        // CS
        let mut cs = self.cs;
        if mods.hr() {
            cs = (cs * 1.3).min(10.0);
        } else if mods.ez() {
            cs *= 0.5;
        }

        // HP
        let hp = (self.hp * multiplier).min(10.0);

        Self {
            hp,
            cs,
            od,
            ar,
            ..self
        }
    }
}
