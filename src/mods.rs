/// Bit flags of the gameplay modifiers, as used by the osu!api.
///
/// Implemented for `u32` so callers can pass the raw mod bits around.
pub trait Mods: Copy {
    const NF: u32 = 1 << 0;
    const EZ: u32 = 1 << 1;
    const TD: u32 = 1 << 2;
    const HD: u32 = 1 << 3;
    const HR: u32 = 1 << 4;
    const DT: u32 = 1 << 6;
    const HT: u32 = 1 << 8;
    const NC: u32 = 1 << 9;
    const FL: u32 = 1 << 10;
    const SO: u32 = 1 << 12;

    /// Mods that alter the playback speed.
    const CHANGE_SPEED: u32 = Self::DT | Self::HT | Self::NC;
    /// Mods that alter the map's difficulty stats.
    const CHANGE_MAP: u32 = Self::HR | Self::EZ | Self::CHANGE_SPEED;

    fn change_speed(self) -> bool;
    fn change_map(self) -> bool;
    fn speed(self) -> f32;
    fn od_ar_hp_multiplier(self) -> f32;
    fn nf(self) -> bool;
    fn ez(self) -> bool;
    fn td(self) -> bool;
    fn hd(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn ht(self) -> bool;
    fn nc(self) -> bool;
    fn fl(self) -> bool;
    fn so(self) -> bool;
}

impl Mods for u32 {
    #[inline]
    fn change_speed(self) -> bool {
        self & Self::CHANGE_SPEED > 0
    }

    #[inline]
    fn change_map(self) -> bool {
        self & Self::CHANGE_MAP > 0
    }

    #[inline]
    fn speed(self) -> f32 {
        if self & (Self::DT | Self::NC) > 0 {
            1.5
        } else if self & Self::HT > 0 {
            0.75
        } else {
            1.0
        }
    }

    #[inline]
    fn od_ar_hp_multiplier(self) -> f32 {
        if self & Self::HR > 0 {
            1.4
        } else if self & Self::EZ > 0 {
            0.5
        } else {
            1.0
        }
    }

    #[inline]
    fn nf(self) -> bool {
        self & Self::NF > 0
    }

    #[inline]
    fn ez(self) -> bool {
        self & Self::EZ > 0
    }

    #[inline]
    fn td(self) -> bool {
        self & Self::TD > 0
    }

    #[inline]
    fn hd(self) -> bool {
        self & Self::HD > 0
    }

    #[inline]
    fn hr(self) -> bool {
        self & Self::HR > 0
    }

    #[inline]
    fn dt(self) -> bool {
        self & Self::DT > 0
    }

    #[inline]
    fn ht(self) -> bool {
        self & Self::HT > 0
    }

    #[inline]
    fn nc(self) -> bool {
        self & Self::NC > 0
    }

    #[inline]
    fn fl(self) -> bool {
        self & Self::FL > 0
    }

    #[inline]
    fn so(self) -> bool {
        self & Self::SO > 0
    }
}

#[cfg(test)]
mod tests {
    use super::Mods;

    #[test]
    fn composite_masks() {
        assert!(u32::DT.change_speed());
        assert!(u32::NC.change_speed());
        assert!(u32::NC.change_map());
        assert!(!(u32::HD | u32::FL).change_map());
    }

    #[test]
    fn nightcore_speeds_up() {
        assert!((u32::NC.speed() - 1.5).abs() < f32::EPSILON);
        assert!((u32::HT.speed() - 0.75).abs() < f32::EPSILON);
    }
}
