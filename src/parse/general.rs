use super::{ParseError, ParseResult};

/// Scalar settings of the `[General]` section.
///
/// Every field carries the documented default so that keys absent from the
/// section still come out filled. `audio_filename` has no schema default and
/// stays empty when the key is never supplied.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralInfo {
    pub audio_filename: String,
    pub audio_lead_in: i32,
    pub preview_time: i32,
    pub countdown: i32,
    pub sample_set: String,
    pub stack_leniency: f32,
    pub mode: i32,
    pub letterbox_in_breaks: bool,
    pub use_skin_sprites: bool,
    pub overlay_position: String,
    pub skin_preference: String,
    pub epilepsy_warning: bool,
    pub countdown_offset: i32,
    pub special_style: bool,
    pub widescreen_storyboard: bool,
    pub samples_match_playback_rate: bool,
}

impl Default for GeneralInfo {
    fn default() -> Self {
        Self {
            audio_filename: String::new(),
            audio_lead_in: 0,
            preview_time: -1,
            countdown: 1,
            sample_set: String::from("Normal"),
            stack_leniency: 0.7,
            mode: 0,
            letterbox_in_breaks: false,
            use_skin_sprites: false,
            overlay_position: String::from("NoChange"),
            skin_preference: String::new(),
            epilepsy_warning: false,
            countdown_offset: 0,
            special_style: false,
            widescreen_storyboard: false,
            samples_match_playback_rate: false,
        }
    }
}

impl GeneralInfo {
    /// Decode one `key: value` pair of the section schema.
    ///
    /// A key outside the schema aborts the parse; callers that need
    /// tolerance must pre-filter their input.
    pub(crate) fn set(&mut self, key: &str, value: &str) -> ParseResult<()> {
        match key {
            "AudioFilename" => self.audio_filename = value.to_owned(),
            "AudioLeadIn" => self.audio_lead_in = value.parse()?,
            "PreviewTime" => self.preview_time = value.parse()?,
            "Countdown" => self.countdown = value.parse()?,
            "SampleSet" => self.sample_set = value.to_owned(),
            "StackLeniency" => self.stack_leniency = value.parse()?,
            "Mode" => self.mode = value.parse()?,
            "LetterboxInBreaks" => self.letterbox_in_breaks = value == "1",
            "UseSkinSprites" => self.use_skin_sprites = value == "1",
            "OverlayPosition" => self.overlay_position = value.to_owned(),
            "SkinPreference" => self.skin_preference = value.to_owned(),
            "EpilepsyWarning" => self.epilepsy_warning = value == "1",
            "CountdownOffset" => self.countdown_offset = value.parse()?,
            "SpecialStyle" => self.special_style = value == "1",
            "WidescreenStoryboard" => self.widescreen_storyboard = value == "1",
            "SamplesMatchPlaybackRate" => self.samples_match_playback_rate = value == "1",
            _ => return Err(ParseError::UnknownKey(key.to_owned())),
        }

        Ok(())
    }
}
