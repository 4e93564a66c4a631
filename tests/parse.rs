use ezpp::{Beatmap, GameMode, HitObjectKind, ParseError, PathType, Pos2};

const FIXTURE: &str = r#"osu file format v14

[General]
AudioFilename: audio.mp3
AudioLeadIn: 0
PreviewTime: 10000
Countdown: 0
SampleSet: Soft
StackLeniency: 0.5
Mode: 0
LetterboxInBreaks: 1

[Editor]
DistanceSpacing: 0.8

[Metadata]
Title: Night of Nights
TitleUnicode: Night of Nights
Artist: beatMARIO
ArtistUnicode: beatMARIO
Creator: some mapper
Version: Insane
Source: Touhou
Tags: touhou flandre
BeatmapID: 123456
BeatmapSetID: 54321

[Difficulty]
HPDrainRate: 5
CircleSize: 4
OverallDifficulty: 7
ApproachRate: 9
SliderMultiplier: 1.6
SliderTickRate: 2

[Events]
0,0,"bg.jpg",0,0

[TimingPoints]
0,333.33,4,2,0,100,1,0
5000,-50,4,2,0,100,0,0
200000,-100,4,2,0,100,0,0

[Colours]
Combo1 : 255,0,0

[HitObjects]
100,100,500,1,0
256,192,1000,5,0,0:0:0:0:
100,200,2000,2,0,B|200:200|300:100,2,200,0|2|0,0:0|0:0|0:0,0:0:0:0:
50,50,3000,6,0,L|150:50,1,100,0|0,0:0|0:0,0:0:0:0:
256,192,4000,12,0,6000,0:0:0:0:
"#;

#[test]
fn parses_header_and_mode() {
    let map = Beatmap::parse(FIXTURE).unwrap();

    assert_eq!(map.version, 14);
    assert_eq!(map.mode, GameMode::Osu);
    assert_eq!(map.id, 123_456);
    assert_eq!(map.set_id, 54_321);
}

#[test]
fn general_section_with_defaults() {
    let map = Beatmap::parse(FIXTURE).unwrap();

    assert_eq!(map.general.audio_filename, "audio.mp3");
    assert_eq!(map.general.preview_time, 10_000);
    assert_eq!(map.general.countdown, 0);
    assert_eq!(map.general.sample_set, "Soft");
    assert!((map.general.stack_leniency - 0.5).abs() < f32::EPSILON);
    assert!(map.general.letterbox_in_breaks);

    // keys absent from the section keep their declared defaults
    assert!(!map.general.use_skin_sprites);
    assert_eq!(map.general.overlay_position, "NoChange");
    assert_eq!(map.general.skin_preference, "");
    assert_eq!(map.general.countdown_offset, 0);
    assert!(!map.general.widescreen_storyboard);
}

#[test]
fn metadata_section() {
    let map = Beatmap::parse(FIXTURE).unwrap();

    assert_eq!(map.metadata.title, "Night of Nights");
    assert_eq!(map.metadata.artist, "beatMARIO");
    assert_eq!(map.metadata.creator, "some mapper");
    assert_eq!(map.metadata.version, "Insane");
    assert_eq!(map.metadata.tags, "touhou flandre");
    assert_eq!(map.metadata.id, 123_456);
    assert_eq!(map.metadata.set_id, 54_321);
}

#[test]
fn difficulty_section() {
    let map = Beatmap::parse(FIXTURE).unwrap();

    assert!((map.stats.hp - 5.0).abs() < f32::EPSILON);
    assert!((map.stats.cs - 4.0).abs() < f32::EPSILON);
    assert!((map.stats.od - 7.0).abs() < f32::EPSILON);
    assert!((map.stats.ar - 9.0).abs() < f32::EPSILON);
    assert!((map.stats.slider_multiplier - 1.6).abs() < f64::EPSILON);
    assert!((map.stats.slider_tick_rate - 2.0).abs() < f64::EPSILON);
}

#[test]
fn timing_points_keep_file_order_and_polarity() {
    let map = Beatmap::parse(FIXTURE).unwrap();

    assert_eq!(map.timing_points.len(), 3);
    assert_eq!(map.timing_points[0].time, 0);
    assert!(!map.timing_points[0].inherited);
    assert!(map.timing_points[1].inherited);
    assert!((map.timing_points[1].beat_length + 50.0).abs() < f64::EPSILON);
    assert_eq!(map.timing_points[2].time, 200_000);
}

#[test]
fn hit_objects_and_counts() {
    let map = Beatmap::parse(FIXTURE).unwrap();

    assert_eq!(map.hit_objects.len(), 5);
    assert_eq!(map.object_counts.circles, 2);
    assert_eq!(map.object_counts.sliders, 2);
    assert_eq!(map.object_counts.spinners, 1);
    assert_eq!(map.object_counts.holds, 0);
    assert_eq!(map.object_counts.scorable(), 5);

    match &map.hit_objects[2].kind {
        HitObjectKind::Slider { pos, curve } => {
            assert_eq!(*pos, Pos2 { x: 100.0, y: 200.0 });
            assert_eq!(curve.path_type, PathType::Bezier);
            assert_eq!(curve.control_points.len(), 2);
            assert_eq!(curve.repetitions, 2);
            assert!((curve.length - 200.0).abs() < f64::EPSILON);
            assert_eq!(curve.edge_sounds, vec![0, 2, 0]);
        }
        kind => panic!("expected slider, got {:?}", kind),
    }

    assert_eq!(map.hit_objects[4].kind, HitObjectKind::Spinner { end_time: 6000 });
}

#[test]
fn parsing_is_pure() {
    let first = Beatmap::parse(FIXTURE).unwrap();
    let second = Beatmap::parse(FIXTURE).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_header_defaults_to_version_1() {
    let map = Beatmap::parse(
        "[Difficulty]\nOverallDifficulty: 7\n\n[HitObjects]\n100,100,500,1,0\n",
    )
    .unwrap();

    assert_eq!(map.version, 1);
    assert_eq!(map.object_counts.circles, 1);
}

#[test]
fn header_without_digits_is_rejected() {
    let err = Beatmap::parse("osu file format vX\n").unwrap_err();

    assert!(matches!(err, ParseError::InvalidVersion));
}

#[test]
fn ar_backfills_from_od() {
    let map = Beatmap::parse("[Difficulty]\nOverallDifficulty: 7\n").unwrap();

    assert!((map.stats.ar - 7.0).abs() < f32::EPSILON);
}

#[test]
fn unknown_key_aborts() {
    let err = Beatmap::parse("[General]\nAudioHash: deadbeef\n").unwrap_err();

    match err {
        ParseError::UnknownKey(key) => assert_eq!(key, "AudioHash"),
        other => panic!("expected unknown key error, got {:?}", other),
    }
}

#[test]
fn unknown_section_is_tolerated() {
    let map = Beatmap::parse(
        "osu file format v14\n\n[SuperSecret]\nWhatever: 1\n\n[HitObjects]\n100,100,500,1,0\n",
    )
    .unwrap();

    assert_eq!(map.object_counts.circles, 1);
}

#[test]
fn comment_lines_are_dropped() {
    let map = Beatmap::parse(
        "osu file format v14\n\n[HitObjects]\n// a comment\n_ignored\n 100,100,400,1,0\n100,100,500,1,0\n",
    )
    .unwrap();

    assert_eq!(map.hit_objects.len(), 1);
    assert_eq!(map.hit_objects[0].start_time, 500);
}

#[test]
fn invalid_slider_is_kept_but_not_counted() {
    let map = Beatmap::parse(
        "osu file format v14\n\n[HitObjects]\n100,100,500,1,0\n100,200,2000,2,0,B|200:200,abc,200,0|0,0:0|0:0,0:0:0:0:\n",
    )
    .unwrap();

    assert_eq!(map.hit_objects.len(), 2);
    assert_eq!(map.hit_objects[1].kind, HitObjectKind::Invalid);
    assert_eq!(map.object_counts.circles, 1);
    assert_eq!(map.object_counts.sliders, 0);
    assert_eq!(map.object_counts.scorable(), 1);
}

#[test]
fn unmatched_type_byte_aborts() {
    let err =
        Beatmap::parse("osu file format v14\n\n[HitObjects]\n100,100,500,64,0\n").unwrap_err();

    assert!(matches!(err, ParseError::UnknownHitObjectKind(64)));
}

#[test]
fn mania_hold_is_parsed_as_stub() {
    let map = Beatmap::parse(
        "osu file format v14\n\n[General]\nMode: 3\n\n[HitObjects]\n448,192,7000,128,0,7500:0:0:0:0:\n",
    )
    .unwrap();

    assert_eq!(map.mode, GameMode::Mania);
    assert_eq!(map.object_counts.holds, 1);
    assert_eq!(map.object_counts.scorable(), 0);
}

#[test]
fn invalid_mode_index_aborts() {
    let err = Beatmap::parse("[General]\nMode: 7\n").unwrap_err();

    assert!(matches!(err, ParseError::InvalidMode(7)));
}
