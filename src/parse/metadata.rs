use super::{ParseError, ParseResult};

/// Free-text and identifier fields of the `[Metadata]` section.
///
/// The numeric ids default to `-1` when absent.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataInfo {
    pub title: String,
    pub title_unicode: String,
    pub artist: String,
    pub artist_unicode: String,
    pub creator: String,
    pub version: String,
    pub source: String,
    pub tags: String,
    pub id: i32,
    pub set_id: i32,
}

impl Default for MetadataInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_unicode: String::new(),
            artist: String::new(),
            artist_unicode: String::new(),
            creator: String::new(),
            version: String::new(),
            source: String::new(),
            tags: String::new(),
            id: -1,
            set_id: -1,
        }
    }
}

impl MetadataInfo {
    pub(crate) fn set(&mut self, key: &str, value: &str) -> ParseResult<()> {
        match key {
            "Title" => self.title = value.to_owned(),
            "TitleUnicode" => self.title_unicode = value.to_owned(),
            "Artist" => self.artist = value.to_owned(),
            "ArtistUnicode" => self.artist_unicode = value.to_owned(),
            "Creator" => self.creator = value.to_owned(),
            "Version" => self.version = value.to_owned(),
            "Source" => self.source = value.to_owned(),
            "Tags" => self.tags = value.to_owned(),
            "BeatmapID" => self.id = value.parse()?,
            "BeatmapSetID" => self.set_id = value.parse()?,
            _ => return Err(ParseError::UnknownKey(key.to_owned())),
        }

        Ok(())
    }
}
