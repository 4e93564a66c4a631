use std::str::FromStr;

use super::{ParseError, ParseResult, Pos2};

pub(crate) const DEFAULT_HIT_SAMPLE: &str = "0:0:0:0:";

const CIRCLE_FLAG: i32 = 1 << 0;
const SLIDER_FLAG: i32 = 1 << 1;
const SPINNER_FLAG: i32 = 1 << 3;
const HOLD_FLAG: i32 = 1 << 7;

const KIND_MASK: i32 = CIRCLE_FLAG | SLIDER_FLAG | SPINNER_FLAG | HOLD_FLAG;

/// A scorable chart event.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub start_time: i32,
    /// Opaque hit sample spec; the format's default when the line carries none.
    pub sample: String,
    pub kind: HitObjectKind,
}

impl HitObject {
    #[inline]
    pub fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle { .. })
    }

    #[inline]
    pub fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider { .. })
    }

    #[inline]
    pub fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner { .. })
    }

    /// Position on the playfield; spinners and invalid objects have none.
    #[inline]
    pub fn pos(&self) -> Option<Pos2> {
        match &self.kind {
            HitObjectKind::Circle { pos }
            | HitObjectKind::Slider { pos, .. }
            | HitObjectKind::Hold { pos } => Some(*pos),
            HitObjectKind::Spinner { .. } | HitObjectKind::Invalid => None,
        }
    }
}

/// Further data related to specific object types.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle {
        pos: Pos2,
    },
    Slider {
        pos: Pos2,
        curve: SliderCurve,
    },
    Spinner {
        end_time: i32,
    },
    /// Hold notes only retain their position; their semantics are
    /// not implemented.
    Hold {
        pos: Pos2,
    },
    /// A slider whose numeric fields could not be decoded. Never treated
    /// as a scoring object.
    Invalid,
}

/// The traced path of a slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCurve {
    pub path_type: PathType,
    pub control_points: Vec<Pos2>,
    pub repetitions: u32,
    /// Track length in osu!pixels.
    pub length: f64,
    pub edge_sounds: Vec<u8>,
    pub edge_sets: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PathType {
    Catmull = 0,
    Bezier = 1,
    Linear = 2,
    PerfectCurve = 3,
}

impl FromStr for PathType {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Linear),
            "C" => Ok(Self::Catmull),
            "B" => Ok(Self::Bezier),
            "P" => Ok(Self::PerfectCurve),
            _ => Err(ParseError::InvalidPathType),
        }
    }
}

impl FromStr for HitObject {
    type Err = ParseError;

    fn from_str(line: &str) -> ParseResult<Self> {
        macro_rules! next_field {
            ($split:expr, $name:literal) => {
                $split.next().ok_or(ParseError::MissingField($name))?.trim()
            };
        }

        let mut split = line.split(',');

        let x: i32 = next_field!(split, "x").parse()?;
        let y: i32 = next_field!(split, "y").parse()?;
        let start_time: i32 = next_field!(split, "time").parse()?;
        let type_byte: i32 = next_field!(split, "type").parse()?;

        // the hit sound byte is not retained in the model
        let _ = split.next();

        let pos = Pos2 {
            x: x as f32,
            y: y as f32,
        };

        let mut params: Vec<&str> = split.collect();

        // the last trailing parameter, when present and non-empty,
        // is the hit sample
        let sample = match params.pop() {
            Some(last) if !last.is_empty() => last.to_owned(),
            _ => DEFAULT_HIT_SAMPLE.to_owned(),
        };

        let kind = match type_byte & KIND_MASK {
            CIRCLE_FLAG => HitObjectKind::Circle { pos },
            SLIDER_FLAG => slider_kind(pos, &params)?,
            SPINNER_FLAG => {
                let end_time = params
                    .first()
                    .ok_or(ParseError::MissingField("endTime"))?
                    .parse()?;

                HitObjectKind::Spinner { end_time }
            }
            HOLD_FLAG => HitObjectKind::Hold { pos },
            _ => return Err(ParseError::UnknownHitObjectKind(type_byte)),
        };

        Ok(Self {
            start_time,
            sample,
            kind,
        })
    }
}

/// Decode the trailing slider parameters `curveSpec, repetitions, length,
/// edgeSounds, edgeSets`.
///
/// A failing *numeric* sub-field degrades the object to
/// [`HitObjectKind::Invalid`] instead of aborting the parse.
fn slider_kind(pos: Pos2, params: &[&str]) -> ParseResult<HitObjectKind> {
    let mut tokens = params
        .first()
        .ok_or(ParseError::MissingField("curve"))?
        .split('|');

    let path_type: PathType = tokens
        .next()
        .ok_or(ParseError::MissingField("curveType"))?
        .parse()?;

    let mut control_points = Vec::with_capacity(16);

    for pair in tokens {
        let mut coords = pair.split(':').map(str::parse::<i32>);

        match (coords.next(), coords.next()) {
            (Some(Ok(x)), Some(Ok(y))) => control_points.push(Pos2 {
                x: x as f32,
                y: y as f32,
            }),
            _ => return Ok(invalid("malformed curve point")),
        }
    }

    let repetitions = match params.get(1).filter(|s| !s.is_empty()) {
        Some(s) => match s.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Ok(invalid("malformed repetition count")),
        },
        None => 1,
    };

    let length = match params.get(2).filter(|s| !s.is_empty()) {
        Some(s) => match s.trim().parse::<f64>() {
            Ok(len) => len,
            Err(_) => return Ok(invalid("malformed length")),
        },
        None => 0.0,
    };

    let edge_sounds = match params.get(3).filter(|s| !s.is_empty()) {
        Some(list) => {
            let mut sounds = Vec::new();

            for sound in list.split('|') {
                match sound.parse::<u8>() {
                    Ok(sound) => sounds.push(sound),
                    Err(_) => return Ok(invalid("malformed edge sound")),
                }
            }

            sounds
        }
        None => Vec::new(),
    };

    let edge_sets = match params.get(4).filter(|s| !s.is_empty()) {
        Some(list) => list.split('|').map(str::to_owned).collect(),
        None => Vec::new(),
    };

    Ok(HitObjectKind::Slider {
        pos,
        curve: SliderCurve {
            path_type,
            control_points,
            repetitions,
            length,
            edge_sounds,
            edge_sets,
        },
    })
}

fn invalid(reason: &str) -> HitObjectKind {
    #[cfg(feature = "tracing")]
    tracing::warn!("slider degraded to invalid object: {}", reason);
    #[cfg(not(feature = "tracing"))]
    let _ = reason;

    HitObjectKind::Invalid
}
