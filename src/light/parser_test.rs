use crate::error::Error;
use crate::lexer::Cursor;
use crate::light::{parse_light, parse_lights, Light};
use crate::qmap::Writes;

#[test]
fn parse_plain_light() {
    let light = parse_light(&mut Cursor::new("0 0 0 300 1 1 1")).unwrap();

    assert_eq!(
        light,
        Light {
            origin: [0.0, 0.0, 0.0],
            radius: 300.0,
            color: [1.0, 1.0, 1.0],
        }
    );
}

#[test]
fn parse_marked_light_with_trailing_fields() {
    let text = "!-64 128 32.5 250 255 128 0 0 \"cubemaps/x\" 0.25 0 0 0 1 0.25 1\n";
    let light = parse_light(&mut Cursor::new(text)).unwrap();

    assert_eq!(light.origin, [-64.0, 128.0, 32.5]);
    assert_eq!(light.radius, 250.0);
    assert_eq!(light.color, [255.0, 128.0, 0.0]);
}

#[test]
fn parse_light_file() {
    let text = "\n0 0 0 300 1 1 1 0\n\n  !8 8 8 100 0.5 0.5 0.5 3 \"\" 1\r\n\n";
    let lights = parse_lights(&mut Cursor::new(text)).unwrap();

    assert_eq!(lights.len(), 2);
    assert_eq!(lights[1].origin, [8.0, 8.0, 8.0]);
    assert_eq!(lights[1].color, [0.5, 0.5, 0.5]);
}

#[test]
fn parse_empty_light_file() {
    assert!(parse_lights(&mut Cursor::new(" \n\r\n")).unwrap().is_empty());
}

#[test]
fn parse_short_light_record() {
    match parse_lights(&mut Cursor::new("0 0 0 300 1 1")) {
        Err(Error::Parser(line_error)) => {
            assert!(line_error.message.contains("6 of 7"));
            assert_eq!(line_error.line_number.unwrap().get(), 1);
        }
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn short_record_does_not_borrow_next_line() {
    let text = "8 8 8 100 1 1 1\n\n0 0 0 300\n1 1 1 200 0.5 0.5 0.5\n";

    match parse_lights(&mut Cursor::new(text)) {
        Err(Error::Parser(line_error)) => {
            assert!(line_error.message.contains("4 of 7"));
            assert_eq!(line_error.line_number.unwrap().get(), 3);
        }
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn bad_field_reports_its_line() {
    match parse_lights(&mut Cursor::new("\n\n!0 0 0 bright 1 1 1\n")) {
        Err(Error::Parser(line_error)) => {
            assert!(line_error.message.contains("bright"));
            assert_eq!(line_error.line_number.unwrap().get(), 3);
        }
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn write_light_entity() {
    let light = Light {
        origin: [0.0, -16.0, 40.5],
        radius: 300.0,
        color: [1.0, 0.5, 0.25],
    };
    let mut buffer = Vec::new();
    light.write_to(&mut buffer).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "{\n \"classname\" \"light\"\n \
         \"origin\" \"0.000000 -16.000000 40.500000\"\n \
         \"light\" \"300.000000\"\n \
         \"_color\" \"1.000000 0.500000 0.250000\"\n}\n"
    );
}
