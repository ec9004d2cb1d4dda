//! End-to-end conversion tests: normalized SVG text in, program text out.

use svgcarve::{svg_to_program, CompilerConfig, ConfigError, DocumentError, Error, ParseError};

const TRIANGLE_SVG: &str = r#"<?xml version="1.0"?>
<svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
  <path d="M 10 10 L 90 10 L 50 90 Z"/>
</svg>"#;

#[test]
fn converts_a_triangle() {
    let program = svg_to_program(TRIANGLE_SVG, &CompilerConfig::default(), None).unwrap();

    let lines: Vec<&str> = program.lines().collect();
    assert_eq!(lines[0], "M5", "tool starts retracted");
    assert_eq!(lines.last(), Some(&"M5"), "tool ends retracted");

    // Three sides, closed back to the start, Y flipped on a 100-unit page.
    let cut_lines: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("G1 X")).collect();
    assert_eq!(
        cut_lines,
        vec![
            "G1 X90.0000 Y90.0000",
            "G1 X50.0000 Y10.0000",
            "G1 X10.0000 Y90.0000",
        ]
    );
    assert!(program.contains("G0 X10.0000 Y90.0000"));
}

#[test]
fn exact_output_snapshot_for_a_single_segment() {
    let svg = r#"<svg viewBox="0 0 100 100"><path d="M 10 10 L 90 90"/></svg>"#;
    let program = svg_to_program(svg, &CompilerConfig::default(), None).unwrap();
    assert_eq!(
        program,
        "M5\n\
         G1 F3000.0\n\
         G0 X10.0000 Y90.0000\n\
         M3\n\
         G1 F600.0\n\
         G1 X90.0000 Y10.0000\n\
         M5\n"
    );
}

#[test]
fn identical_input_gives_identical_bytes() {
    let config = CompilerConfig {
        pass_depth: 1.0,
        ..Default::default()
    };
    let first = svg_to_program(TRIANGLE_SVG, &config, Some(3.5)).unwrap();
    let second = svg_to_program(TRIANGLE_SVG, &config, Some(3.5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn multipass_depths_step_down_and_clamp() {
    let config = CompilerConfig {
        pass_depth: 2.0,
        ..Default::default()
    };
    let program = svg_to_program(TRIANGLE_SVG, &config, Some(5.0)).unwrap();

    assert!(program.contains("G1 Z-2.0000"));
    assert!(program.contains("G1 Z-4.0000"));
    assert!(program.contains("G1 Z-5.0000"));
    assert!(!program.contains("G1 Z-6.0000"), "no overshoot past total depth");

    // One engage per subpath per pass.
    assert_eq!(program.matches("M3").count(), 3);
}

#[test]
fn surface_mode_emits_no_z_motion() {
    let program = svg_to_program(TRIANGLE_SVG, &CompilerConfig::default(), None).unwrap();
    assert!(!program.contains(" Z"), "single-pass program has no Z moves");
}

#[test]
fn empty_drawing_is_a_noop_program() {
    let svg = r#"<svg viewBox="0 0 100 100"></svg>"#;
    let program = svg_to_program(svg, &CompilerConfig::default(), None).unwrap();
    assert_eq!(program, "M5\n");
}

#[test]
fn invalid_config_rejected_without_output() {
    let config = CompilerConfig {
        movement_speed: 0.0,
        cutting_speed: 100.0,
        pass_depth: 0.0,
        ..Default::default()
    };
    let err = svg_to_program(TRIANGLE_SVG, &config, None).unwrap_err();
    assert_eq!(
        err,
        Error::Config(ConfigError::NonPositiveSpeed {
            field: "movement_speed",
            value: 0.0
        })
    );
}

#[test]
fn trailing_garbage_fails_the_whole_conversion() {
    let svg = r#"<svg viewBox="0 0 100 100"><path d="M 0,0 L 10,10 Z X"/></svg>"#;
    let err = svg_to_program(svg, &CompilerConfig::default(), None).unwrap_err();
    assert_eq!(
        err,
        Error::Parse(ParseError::UnknownCommand {
            command: 'X',
            offset: 16
        })
    );
}

#[test]
fn one_bad_path_fails_even_with_good_siblings() {
    let svg = r#"<svg viewBox="0 0 100 100">
  <path d="M 0 0 L 10 10"/>
  <path d="M 0 0 A 5 5 0 0 1 10 10"/>
</svg>"#;
    let err = svg_to_program(svg, &CompilerConfig::default(), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnsupportedCommand { command: 'A', .. })
    ));
}

#[test]
fn non_svg_input_is_a_document_error() {
    let err = svg_to_program("not an svg", &CompilerConfig::default(), None).unwrap_err();
    assert_eq!(err, Error::Document(DocumentError::MissingSvgElement));
}

#[test]
fn converts_a_file_on_disk() {
    use std::fs;

    let dir = tempfile::tempdir().unwrap();
    let svg_path = dir.path().join("multipass.svg");
    fs::write(&svg_path, TRIANGLE_SVG).unwrap();

    let content = fs::read_to_string(&svg_path).unwrap();
    let config = CompilerConfig {
        pass_depth: 0.5,
        ..Default::default()
    };
    let program = svg_to_program(&content, &config, Some(1.0)).unwrap();

    assert!(program.contains("G1 Z-0.5000"));
    assert!(program.contains("G1 Z-1.0000"));
}

#[test]
fn curves_produce_many_short_cuts() {
    let svg = r#"<svg viewBox="0 0 100 100">
  <path d="M 10 50 C 10 10 90 10 90 50 S 90 90 50 90"/>
</svg>"#;
    let program = svg_to_program(svg, &CompilerConfig::default(), None).unwrap();

    let cut_count = program
        .lines()
        .filter(|l| l.starts_with("G1 X"))
        .count();
    assert!(cut_count > 10, "curves should flatten into many segments");
}
