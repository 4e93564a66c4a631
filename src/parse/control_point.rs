use std::str::FromStr;

use super::{ParseError, ParseResult};

/// Tempo or slider velocity directive, anchored at a point in time.
///
/// An *inherited* point does not redefine the base beat length; its negative
/// `beat_length` encodes a slider velocity multiplier as `-100 / beat_length`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingPoint {
    pub time: i32,
    pub beat_length: f64,
    pub meter: i32,
    pub sample_set: i32,
    pub sample_index: i32,
    pub volume: i32,
    pub inherited: bool,
    pub effects: i32,
}

impl FromStr for TimingPoint {
    type Err = ParseError;

    fn from_str(line: &str) -> ParseResult<Self> {
        macro_rules! next_field {
            ($split:expr, $name:literal) => {
                $split.next().ok_or(ParseError::MissingField($name))?.trim()
            };
        }

        let mut split = line.split(',');

        Ok(Self {
            time: next_field!(split, "time").parse()?,
            beat_length: next_field!(split, "beatLength").parse()?,
            meter: next_field!(split, "meter").parse()?,
            sample_set: next_field!(split, "sampleSet").parse()?,
            sample_index: next_field!(split, "sampleIndex").parse()?,
            volume: next_field!(split, "volume").parse()?,
            inherited: next_field!(split, "uninherited") != "1",
            effects: next_field!(split, "effects").parse()?,
        })
    }
}
