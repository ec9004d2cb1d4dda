//! SVG path grammar parser.
//!
//! Parses the path-data mini-language (`M`/`L`/`H`/`V`/`C`/`S`/`Q`/`T`/`Z`
//! in absolute and relative form) into typed sub-paths in document
//! coordinates. Relative coordinates and the smooth-curve shorthands are
//! resolved here, so downstream stages only ever see absolute geometry.
//!
//! Parsing is strict: an unknown command letter or a malformed numeric
//! literal fails the whole conversion with the byte offset of the offender.
//! There is no best-effort recovery.

use svgcarve_core::error::ParseError;
use svgcarve_core::geometry::{Point, Primitive, SubPath};
use tracing::debug;

/// Parse one path-data string into sub-paths in document coordinates.
pub fn parse_path_data(data: &str) -> Result<Vec<SubPath>, ParseError> {
    let subpaths = PathParser::new(data).run()?;
    debug!(subpaths = subpaths.len(), "parsed path data");
    Ok(subpaths)
}

/// A sub-path being accumulated while its commands stream in.
struct PendingSubPath {
    start: Point,
    primitives: Vec<Primitive>,
    closed: bool,
}

struct PathParser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Current pen position.
    current: Point,
    /// Start point of the current sub-path, for `Z` and post-`Z` drawing.
    subpath_start: Point,
    /// Second control point of the preceding cubic command, if the
    /// preceding command was `C`/`S`. Reflected by the smooth shorthand.
    prev_cubic_ctrl: Option<Point>,
    /// Control point of the preceding quadratic command, if the preceding
    /// command was `Q`/`T`.
    prev_quad_ctrl: Option<Point>,
    pending: Option<PendingSubPath>,
    subpaths: Vec<SubPath>,
}

impl<'a> PathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            current: Point::new(0.0, 0.0),
            subpath_start: Point::new(0.0, 0.0),
            prev_cubic_ctrl: None,
            prev_quad_ctrl: None,
            pending: None,
            subpaths: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<SubPath>, ParseError> {
        let mut last_command: Option<u8> = None;

        loop {
            self.skip_separators();
            if self.at_end() {
                break;
            }

            let c = self.bytes[self.pos];
            let command = if c.is_ascii_alphabetic() {
                let offset = self.pos;
                self.pos += 1;
                Self::check_command(c, offset)?;
                c
            } else if Self::starts_number(c) {
                // Numbers after a completed command repeat it; after a
                // move the repeated command is a line.
                match last_command {
                    Some(b'M') => b'L',
                    Some(b'm') => b'l',
                    Some(b'Z') | Some(b'z') | None => {
                        return Err(ParseError::UnexpectedToken {
                            found: c as char,
                            offset: self.pos,
                        });
                    }
                    Some(prev) => prev,
                }
            } else {
                return Err(ParseError::UnexpectedToken {
                    found: self.char_at(self.pos),
                    offset: self.pos,
                });
            };

            self.apply(command)?;
            last_command = Some(command);
        }

        self.flush_pending();
        Ok(self.subpaths)
    }

    fn check_command(c: u8, offset: usize) -> Result<(), ParseError> {
        match c {
            b'M' | b'm' | b'L' | b'l' | b'H' | b'h' | b'V' | b'v' | b'C' | b'c' | b'S'
            | b's' | b'Q' | b'q' | b'T' | b't' | b'Z' | b'z' => Ok(()),
            // Arc input is resolved away by the external normalization
            // step, and the data model carries no arc primitive.
            b'A' | b'a' => Err(ParseError::UnsupportedCommand {
                command: c as char,
                offset,
            }),
            _ => Err(ParseError::UnknownCommand {
                command: c as char,
                offset,
            }),
        }
    }

    /// Executes one repetition of a command, consuming its arguments.
    fn apply(&mut self, command: u8) -> Result<(), ParseError> {
        let relative = command.is_ascii_lowercase();
        match command.to_ascii_uppercase() {
            b'M' => {
                let target = self.read_point(relative)?;
                self.flush_pending();
                self.current = target;
                self.subpath_start = target;
                self.pending = Some(PendingSubPath {
                    start: target,
                    primitives: Vec::new(),
                    closed: false,
                });
                self.reset_smooth_state();
            }
            b'L' => {
                let target = self.read_point(relative)?;
                self.push_primitive(Primitive::LineTo(target));
                self.reset_smooth_state();
            }
            b'H' => {
                let x = self.next_number()?;
                let x = if relative { self.current.x + x } else { x };
                self.push_primitive(Primitive::LineTo(Point::new(x, self.current.y)));
                self.reset_smooth_state();
            }
            b'V' => {
                let y = self.next_number()?;
                let y = if relative { self.current.y + y } else { y };
                self.push_primitive(Primitive::LineTo(Point::new(self.current.x, y)));
                self.reset_smooth_state();
            }
            b'C' => {
                let ctrl1 = self.read_point(relative)?;
                let ctrl2 = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.push_primitive(Primitive::CubicTo { ctrl1, ctrl2, end });
                self.prev_cubic_ctrl = Some(ctrl2);
                self.prev_quad_ctrl = None;
            }
            b'S' => {
                let ctrl1 = self.reflected_control(self.prev_cubic_ctrl);
                let ctrl2 = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.push_primitive(Primitive::CubicTo { ctrl1, ctrl2, end });
                self.prev_cubic_ctrl = Some(ctrl2);
                self.prev_quad_ctrl = None;
            }
            b'Q' => {
                let ctrl = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.push_primitive(Primitive::QuadraticTo { ctrl, end });
                self.prev_quad_ctrl = Some(ctrl);
                self.prev_cubic_ctrl = None;
            }
            b'T' => {
                let ctrl = self.reflected_control(self.prev_quad_ctrl);
                let end = self.read_point(relative)?;
                self.push_primitive(Primitive::QuadraticTo { ctrl, end });
                self.prev_quad_ctrl = Some(ctrl);
                self.prev_cubic_ctrl = None;
            }
            b'Z' => {
                self.close_subpath();
                self.reset_smooth_state();
            }
            _ => unreachable!("check_command admits only grammar letters"),
        }
        Ok(())
    }

    /// Reflects the previous control point through the current point. With
    /// no preceding curve command of the matching kind, the reflection
    /// degenerates to the current point.
    fn reflected_control(&self, prev: Option<Point>) -> Point {
        match prev {
            Some(ctrl) => Point::new(
                2.0 * self.current.x - ctrl.x,
                2.0 * self.current.y - ctrl.y,
            ),
            None => self.current,
        }
    }

    fn reset_smooth_state(&mut self) {
        self.prev_cubic_ctrl = None;
        self.prev_quad_ctrl = None;
    }

    /// Appends a primitive, opening a fresh sub-path at the pen position
    /// when drawing continues after a close.
    fn push_primitive(&mut self, primitive: Primitive) {
        let start = self.current;
        let pending = self.pending.get_or_insert_with(|| PendingSubPath {
            start,
            primitives: Vec::new(),
            closed: false,
        });
        pending.primitives.push(primitive);
        self.current = primitive.end();
    }

    fn close_subpath(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            if !pending.primitives.is_empty() {
                if self.current != pending.start {
                    pending.primitives.push(Primitive::LineTo(pending.start));
                }
                pending.closed = true;
            }
        }
        self.current = self.subpath_start;
        self.flush_pending();
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            // A bare move produces no traversal.
            if !pending.primitives.is_empty() {
                self.subpaths
                    .push(SubPath::new(pending.start, pending.primitives, pending.closed));
            }
        }
    }

    fn read_point(&mut self, relative: bool) -> Result<Point, ParseError> {
        let x = self.next_number()?;
        let y = self.next_number()?;
        if relative {
            Ok(Point::new(self.current.x + x, self.current.y + y))
        } else {
            Ok(Point::new(x, y))
        }
    }

    /// Lexes one numeric literal. A second decimal point terminates the
    /// literal (`"1.2.3"` is the pair 1.2, 0.3 in this grammar).
    fn next_number(&mut self) -> Result<f64, ParseError> {
        self.skip_separators();
        let start = self.pos;
        if self.at_end() {
            return Err(ParseError::UnexpectedEnd { offset: self.pos });
        }

        if matches!(self.bytes[self.pos], b'+' | b'-') {
            self.pos += 1;
        }
        let mut has_digits = false;
        while !self.at_end() && self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
            has_digits = true;
        }
        if !self.at_end() && self.bytes[self.pos] == b'.' {
            self.pos += 1;
            while !self.at_end() && self.bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
                has_digits = true;
            }
        }
        if !has_digits {
            if self.pos == start {
                return Err(ParseError::UnexpectedToken {
                    found: self.char_at(start),
                    offset: start,
                });
            }
            return Err(ParseError::MalformedNumber {
                token: self.input[start..self.pos].to_string(),
                offset: start,
            });
        }
        if !self.at_end() && matches!(self.bytes[self.pos], b'e' | b'E') {
            self.pos += 1;
            if !self.at_end() && matches!(self.bytes[self.pos], b'+' | b'-') {
                self.pos += 1;
            }
            let mut exp_digits = false;
            while !self.at_end() && self.bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
                exp_digits = true;
            }
            if !exp_digits {
                return Err(ParseError::MalformedNumber {
                    token: self.input[start..self.pos].to_string(),
                    offset: start,
                });
            }
        }

        let token = &self.input[start..self.pos];
        let value: f64 = token.parse().map_err(|_| ParseError::MalformedNumber {
            token: token.to_string(),
            offset: start,
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFiniteNumber {
                token: token.to_string(),
                offset: start,
            });
        }
        Ok(value)
    }

    /// True for any byte that can open a numeric literal.
    fn starts_number(c: u8) -> bool {
        c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.')
    }

    fn skip_separators(&mut self) {
        while !self.at_end() {
            match self.bytes[self.pos] {
                b' ' | b',' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn char_at(&self, offset: usize) -> char {
        self.input[offset..].chars().next().unwrap_or('\u{fffd}')
    }
}
