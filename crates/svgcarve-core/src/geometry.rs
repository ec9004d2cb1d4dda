//! Geometry data model for the conversion pipeline.
//!
//! A parsed drawing is an ordered list of sub-paths, each an ordered,
//! non-empty run of primitives sharing one start point. The drawing is
//! built once per conversion, never mutated afterwards, and consumed
//! exactly once by the motion compiler.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The coordinate convention a set of points is expressed in.
///
/// Document space is the SVG convention: origin top-left, Y increasing
/// downward. Machine space has Y increasing upward with a configurable
/// origin. The normalizer converts the former to the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSpace {
    /// SVG page coordinates, Y down.
    Document,
    /// Machine table coordinates, Y up.
    Machine,
}

/// One atomic geometric operation within a sub-path.
///
/// Each primitive implicitly starts at the current pen position and ends at
/// its terminal point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Straight segment to the given point.
    LineTo(Point),
    /// Cubic Bézier segment.
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    /// Quadratic Bézier segment.
    QuadraticTo { ctrl: Point, end: Point },
}

impl Primitive {
    /// Terminal point of the primitive.
    pub fn end(&self) -> Point {
        match self {
            Primitive::LineTo(p) => *p,
            Primitive::CubicTo { end, .. } => *end,
            Primitive::QuadraticTo { end, .. } => *end,
        }
    }

    /// True when the primitive collapses onto the given point: its end and
    /// any control points all coincide with it.
    pub fn is_degenerate_at(&self, p: Point) -> bool {
        match self {
            Primitive::LineTo(end) => *end == p,
            Primitive::CubicTo { ctrl1, ctrl2, end } => *ctrl1 == p && *ctrl2 == p && *end == p,
            Primitive::QuadraticTo { ctrl, end } => *ctrl == p && *end == p,
        }
    }
}

/// One continuous pen-down traversal: an ordered, non-empty sequence of
/// primitives sharing one starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPath {
    /// Pen position at the start of the traversal.
    pub start: Point,
    /// The primitives, in drawing order.
    pub primitives: Vec<Primitive>,
    /// Whether the pen returns to `start` (close-path).
    pub closed: bool,
}

impl SubPath {
    /// Creates a new sub-path.
    pub fn new(start: Point, primitives: Vec<Primitive>, closed: bool) -> Self {
        debug_assert!(
            !primitives.is_empty(),
            "a SubPath must contain at least one primitive"
        );
        Self {
            start,
            primitives,
            closed,
        }
    }

    /// Pen position after the last primitive.
    pub fn end(&self) -> Point {
        self.primitives
            .last()
            .map(|p| p.end())
            .unwrap_or(self.start)
    }

    /// True when every primitive collapses onto the start point, so the
    /// traversal produces no physical motion.
    pub fn is_zero_length(&self) -> bool {
        self.primitives.iter().all(|p| p.is_degenerate_at(self.start))
    }
}

/// An ordered sequence of sub-paths in document order.
///
/// Traversal order in the compiled output equals this order; no reordering
/// for travel minimization is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// The sub-paths, in document order.
    pub subpaths: Vec<SubPath>,
    /// Coordinate convention the points are expressed in.
    pub space: CoordinateSpace,
}

impl Drawing {
    /// Creates a drawing in machine space.
    pub fn new(subpaths: Vec<SubPath>) -> Self {
        Self {
            subpaths,
            space: CoordinateSpace::Machine,
        }
    }

    /// True when the drawing holds no sub-paths.
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Number of sub-paths.
    pub fn len(&self) -> usize {
        self.subpaths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn primitive_end_points() {
        let line = Primitive::LineTo(Point::new(1.0, 2.0));
        assert_eq!(line.end(), Point::new(1.0, 2.0));

        let cubic = Primitive::CubicTo {
            ctrl1: Point::new(0.0, 1.0),
            ctrl2: Point::new(1.0, 1.0),
            end: Point::new(2.0, 0.0),
        };
        assert_eq!(cubic.end(), Point::new(2.0, 0.0));
    }

    #[test]
    fn zero_length_detection() {
        let p = Point::new(5.0, 5.0);
        let degenerate = SubPath::new(p, vec![Primitive::LineTo(p)], false);
        assert!(degenerate.is_zero_length());

        let real = SubPath::new(p, vec![Primitive::LineTo(Point::new(6.0, 5.0))], false);
        assert!(!real.is_zero_length());

        // A curve whose endpoints coincide but whose controls bow outward
        // still moves the pen.
        let bowed = SubPath::new(
            p,
            vec![Primitive::CubicTo {
                ctrl1: Point::new(0.0, 0.0),
                ctrl2: Point::new(10.0, 0.0),
                end: p,
            }],
            false,
        );
        assert!(!bowed.is_zero_length());
    }

    #[test]
    fn subpath_end_is_last_primitive_end() {
        let sp = SubPath::new(
            Point::new(0.0, 0.0),
            vec![
                Primitive::LineTo(Point::new(1.0, 0.0)),
                Primitive::LineTo(Point::new(1.0, 1.0)),
            ],
            false,
        );
        assert_eq!(sp.end(), Point::new(1.0, 1.0));
    }
}
