mod control_point;
mod error;
mod general;
mod hitobject;
mod metadata;
mod pos2;
mod stats;

pub use control_point::TimingPoint;
pub use error::{ParseError, ParseResult};
pub use general::GeneralInfo;
pub use hitobject::{HitObject, HitObjectKind, PathType, SliderCurve};
pub use metadata::MetadataInfo;
pub use pos2::Pos2;
pub use stats::Stats;

/// The four game modes a beatmap can be made for.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum GameMode {
    Osu = 0,
    Taiko = 1,
    Catch = 2,
    Mania = 3,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Osu
    }
}

impl GameMode {
    fn from_index(index: i32) -> ParseResult<Self> {
        match index {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            other => Err(ParseError::InvalidMode(other)),
        }
    }
}

/// Tally of the hit object kinds, computed once after parsing.
///
/// Invalid objects are counted in none of the buckets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCounts {
    pub circles: u32,
    pub sliders: u32,
    pub spinners: u32,
    pub holds: u32,
}

impl ObjectCounts {
    fn of(hit_objects: &[HitObject]) -> Self {
        let mut counts = Self::default();

        for object in hit_objects {
            match object.kind {
                HitObjectKind::Circle { .. } => counts.circles += 1,
                HitObjectKind::Slider { .. } => counts.sliders += 1,
                HitObjectKind::Spinner { .. } => counts.spinners += 1,
                HitObjectKind::Hold { .. } => counts.holds += 1,
                HitObjectKind::Invalid => {}
            }
        }

        counts
    }

    /// Objects that award score and combo in osu!standard.
    #[inline]
    pub fn scorable(&self) -> u32 {
        self.circles + self.sliders + self.spinners
    }
}

/// A parsed beatmap.
///
/// Hit objects and timing points keep their file order; lookups that search
/// for the nearest preceding timing point rely on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Beatmap {
    pub mode: GameMode,
    pub version: i32,

    /// Mirror of [`MetadataInfo::id`].
    pub id: i32,
    /// Mirror of [`MetadataInfo::set_id`].
    pub set_id: i32,

    pub general: GeneralInfo,
    pub metadata: MetadataInfo,
    pub stats: Stats,

    pub timing_points: Vec<TimingPoint>,
    pub hit_objects: Vec<HitObject>,
    pub object_counts: ObjectCounts,
}

pub(crate) const VERSION_HEADER: &str = "osu file format v";

impl Beatmap {
    /// Parse a beatmap from its textual `.osu` representation.
    ///
    /// The optional first line is a version header; its version is the
    /// integer formed by stripping every non-digit character after the
    /// `osu file format v` marker. Without a header the version is 1.
    ///
    /// Unrecognized section names are tolerated and their lines dropped;
    /// an unrecognized *key* within the General, Metadata, or Difficulty
    /// section aborts with [`ParseError::UnknownKey`].
    pub fn parse(text: &str) -> ParseResult<Self> {
        let mut map = Self {
            version: 1,
            ..Self::default()
        };

        let mut section = Section::None;
        let mut first = true;

        for raw in text.split('\n') {
            if raw.starts_with(' ') || raw.starts_with('_') || raw.starts_with("//") {
                continue;
            }

            let line = raw.trim();

            if line.is_empty() {
                continue;
            }

            if first {
                first = false;

                if let Some(idx) = line.find(VERSION_HEADER) {
                    map.version = parse_version(&line[idx + VERSION_HEADER.len()..])?;
                    continue;
                }
            }

            if line.starts_with('[') && line.ends_with(']') {
                section = Section::from_name(&line[1..line.len() - 1]);
                continue;
            }

            match section {
                Section::General => {
                    let (key, value) = split_colon(line)?;
                    map.general.set(key, value)?;
                }
                Section::Metadata => {
                    let (key, value) = split_colon(line)?;
                    map.metadata.set(key, value)?;
                }
                Section::Difficulty => {
                    let (key, value) = split_colon(line)?;
                    map.stats.set(key, value)?;
                }
                Section::TimingPoints => map.timing_points.push(line.parse()?),
                Section::HitObjects => map.hit_objects.push(line.parse()?),
                Section::Editor | Section::Events | Section::Colours | Section::None => {}
            }
        }

        // old formats have no approach rate of their own
        if map.stats.ar < 0.0 {
            map.stats.ar = map.stats.od;
        }

        map.object_counts = ObjectCounts::of(&map.hit_objects);
        map.mode = GameMode::from_index(map.general.mode)?;
        map.id = map.metadata.id;
        map.set_id = map.metadata.set_id;

        Ok(map)
    }
}

fn parse_version(rest: &str) -> ParseResult<i32> {
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(ParseError::InvalidVersion);
    }

    digits.parse().map_err(|_| ParseError::InvalidVersion)
}

/// Split a `key: value` line at its first colon, both sides trimmed.
/// Text after a second colon is not part of the value.
#[inline]
fn split_colon(line: &str) -> ParseResult<(&str, &str)> {
    let mut split = line.split(':');

    match (split.next(), split.next()) {
        (Some(key), Some(value)) => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::BadLine),
    }
}

#[derive(Copy, Clone, Debug)]
enum Section {
    None,
    General,
    Editor,
    Metadata,
    Difficulty,
    Events,
    TimingPoints,
    Colours,
    HitObjects,
}

impl Section {
    #[inline]
    fn from_name(name: &str) -> Self {
        match name {
            "General" => Self::General,
            "Editor" => Self::Editor,
            "Metadata" => Self::Metadata,
            "Difficulty" => Self::Difficulty,
            "Events" => Self::Events,
            "TimingPoints" => Self::TimingPoints,
            "Colours" => Self::Colours,
            "HitObjects" => Self::HitObjects,
            _ => Self::None,
        }
    }
}
