use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::convert::Converter;
use crate::document::{companion_path, Document};
use crate::error::Error;
use crate::qmap::Writes;

const MAP: &str = "{\n\
\"classname\" \"worldspawn\"\n\
\"wad\" \"gfx/base.wad\"\n\
{\n\
( 0 0 0 ) ( 0 64 0 ) ( 64 0 0 ) GROUND1_6 0 0 0 1 1\n\
( 0 0 64 ) ( 64 0 64 ) ( 0 64 64 ) sky1 0 0 0 1 1\n\
}\n\
}\n\
{\n\
\"classname\" \"light\"\n\
\"origin\" \"0 0 32\"\n\
}\n\
{\n\
\"classname\" \"info_player_start\"\n\
\"origin\" \"16 16 24\"\n\
}\n";

fn written(document: &Document) -> String {
    let mut buffer = Vec::new();
    document.write_to(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn companion_replaces_extension() {
    assert_eq!(
        companion_path(&PathBuf::from("maps/e1m1.map")),
        PathBuf::from("maps/e1m1.rtlights")
    );
    assert_eq!(
        companion_path(&PathBuf::from("start")),
        PathBuf::from("start.rtlights")
    );
}

#[test]
fn new_derives_or_keeps_lights_path() {
    let derived = Document::new("e1m1.map", None);
    let explicit = Document::new("e1m1.map", Some(PathBuf::from("other.lights")));

    assert_eq!(derived.lights_path, PathBuf::from("e1m1.rtlights"));
    assert_eq!(explicit.lights_path, PathBuf::from("other.lights"));
    assert!(derived.entities.is_empty() && derived.lights.is_empty());
}

#[test]
fn convert_leaves_source_untouched() {
    let mut document = Document::new("e1m1.map", None);
    document.parse_map(MAP).unwrap();
    document.parse_lights("0 0 32 200 1 0.5 0.5\n").unwrap();
    let before = document.clone();

    let converted = document.convert(&Converter::default());

    assert_eq!(document, before);
    assert_eq!(document.entities.len(), 3);
    assert_eq!(converted.entities.len(), 2);
    assert_eq!(converted.lights, document.lights);
    assert_eq!(converted.entities[0].brushes.len(), 1);
    assert_eq!(converted.entities[0].brushes[0].len(), 2);
}

#[test]
fn write_converted_document() {
    let mut document = Document::new("e1m1.map", None);
    document.parse_map(MAP).unwrap();
    document.parse_lights("0 0 32 200 1 0.5 0.5\n").unwrap();

    let text = written(&document.convert(&Converter::default()));

    assert!(!text.contains("\"wad\""));
    assert!(text.contains(
        "  ( 0 0 0 ) ( 0 64 0 ) ( 64 0 0 ) rygel/ground1_6 \
         0.000000 0.000000 0.000000 0.062500 0.062500\n"
    ));
    assert!(text.contains(" common/sky 0.000000 0.000000 0.000000 0.500000 0.500000\n"));
    assert!(text.contains(" \"classname\" \"info_player_start\"\n"));
    assert!(text.ends_with(
        "{\n \"classname\" \"light\"\n \"origin\" \"0.000000 0.000000 32.000000\"\n \
         \"light\" \"200.000000\"\n \"_color\" \"1.000000 0.500000 0.500000\"\n}\n"
    ));
    assert_eq!(text.matches("\"classname\" \"light\"").count(), 1);
}

#[test]
fn trailing_content_is_ignored() {
    let mut document = Document::default();
    document.parse_map("{ \"classname\" \"worldspawn\" }\n}").unwrap();

    assert_eq!(document.entities.len(), 1);
}

fn generated_map(brushes: usize) -> String {
    let mut text = String::from("{\n\"classname\" \"worldspawn\"\n");

    for i in 0..brushes {
        text.push_str("{\n");
        for _ in 0..6 {
            text.push_str(&format!(
                "( {i} 0 0 ) ( {i} 64 0 ) ( {i} 0 64 ) METAL1_2 0 0 0 1 1\n"
            ));
        }
        text.push_str("}\n");
    }

    text.push_str("}\n");
    text
}

#[test]
fn parse_large_map_quickly() {
    let text = generated_map(8_000);
    assert!(text.len() > 2_000_000);

    let started = Instant::now();
    let mut document = Document::default();
    document.parse_map(&text).unwrap();

    assert_eq!(document.entities[0].brushes.len(), 8_000);
    assert!(started.elapsed() < Duration::from_secs(20));
}

#[test]
fn parse_error_line_at_end_of_large_map() {
    let mut text = generated_map(5_000);
    text.push_str("{\n\"classname\" \"light\"\n\"origin\" \"0 0\n");
    let lines = text.lines().count() as u64;

    let err = Document::default().parse_map(&text).unwrap_err();
    let line_error = err.line_error().unwrap();

    assert_eq!(line_error.line_number.unwrap().get(), lines);
}

#[test]
fn read_map_and_lights() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("start.map");
    fs::write(&map_path, MAP).unwrap();
    fs::write(dir.path().join("start.rtlights"), "!0 0 0 300 1 1 1 0\n").unwrap();

    let mut document = Document::new(&map_path, None);
    document.read().unwrap();

    assert_eq!(document.entities.len(), 3);
    assert_eq!(document.lights.len(), 1);
}

#[test]
fn read_without_lights() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("start.map");
    fs::write(&map_path, MAP).unwrap();

    let mut document = Document::new(&map_path, None);
    document.read().unwrap();

    assert_eq!(document.entities.len(), 3);
    assert!(document.lights.is_empty());
}

#[test]
fn read_missing_map() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("missing.map");

    match Document::new(&map_path, None).read() {
        Err(Error::Io { path, .. }) => assert_eq!(path, map_path),
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn read_bad_lights_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("start.map");
    let lights_path = dir.path().join("custom.lights");
    fs::write(&map_path, MAP).unwrap();
    fs::write(&lights_path, "0 0 0 bright 1 1 1\n").unwrap();

    let err = Document::new(&map_path, Some(lights_path)).read().unwrap_err();
    assert!(matches!(err, Error::Parser(_)));
}
