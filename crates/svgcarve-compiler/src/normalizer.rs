//! Document-to-machine coordinate normalization.
//!
//! SVG puts the origin at the top-left with Y growing downward; machines
//! put it at a configurable corner with Y growing upward. The conversion is
//! a uniform per-point transform anchored at the page height:
//!
//! ```text
//! machine_x = document_x * scale + offset_x
//! machine_y = (page_height - document_y) * scale + offset_y
//! ```
//!
//! Curves pass through typed and unflattened; discretization belongs to the
//! motion compiler so feed-rate segmentation can be tuned independently of
//! geometry.

use svgcarve_core::geometry::{CoordinateSpace, Drawing, Point, Primitive, SubPath};
use tracing::debug;

/// Converts parsed sub-paths from document space into a machine-space
/// [`Drawing`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    page_height: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Normalizer {
    /// Creates a normalizer for a page of the given height (user units).
    pub fn new(page_height: f64) -> Self {
        Self {
            page_height,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Uniform scale applied after the Y flip.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Machine-space origin offset applied after flip and scale.
    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Builds the machine-space drawing, dropping sub-paths that produce no
    /// physical motion.
    pub fn normalize(&self, subpaths: Vec<SubPath>) -> Drawing {
        let total = subpaths.len();
        let converted: Vec<SubPath> = subpaths
            .into_iter()
            .filter(|sp| !sp.is_zero_length())
            .map(|sp| self.convert_subpath(sp))
            .collect();
        if converted.len() < total {
            debug!(
                dropped = total - converted.len(),
                "dropped zero-length subpaths"
            );
        }

        Drawing {
            subpaths: converted,
            space: CoordinateSpace::Machine,
        }
    }

    fn convert_subpath(&self, subpath: SubPath) -> SubPath {
        let primitives = subpath
            .primitives
            .iter()
            .map(|p| self.convert_primitive(p))
            .collect();
        SubPath::new(self.convert_point(subpath.start), primitives, subpath.closed)
    }

    fn convert_primitive(&self, primitive: &Primitive) -> Primitive {
        match primitive {
            Primitive::LineTo(end) => Primitive::LineTo(self.convert_point(*end)),
            Primitive::CubicTo { ctrl1, ctrl2, end } => Primitive::CubicTo {
                ctrl1: self.convert_point(*ctrl1),
                ctrl2: self.convert_point(*ctrl2),
                end: self.convert_point(*end),
            },
            Primitive::QuadraticTo { ctrl, end } => Primitive::QuadraticTo {
                ctrl: self.convert_point(*ctrl),
                end: self.convert_point(*end),
            },
        }
    }

    fn convert_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset_x,
            (self.page_height - p.y) * self.scale + self.offset_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_subpath(from: Point, to: Point) -> SubPath {
        SubPath::new(from, vec![Primitive::LineTo(to)], false)
    }

    #[test]
    fn flips_y_around_page_height() {
        let drawing = Normalizer::new(100.0).normalize(vec![line_subpath(
            Point::new(10.0, 0.0),
            Point::new(10.0, 100.0),
        )]);
        assert_eq!(drawing.space, CoordinateSpace::Machine);
        assert_eq!(drawing.subpaths[0].start, Point::new(10.0, 100.0));
        assert_eq!(
            drawing.subpaths[0].primitives[0],
            Primitive::LineTo(Point::new(10.0, 0.0))
        );
    }

    #[test]
    fn flips_curve_control_points() {
        let sp = SubPath::new(
            Point::new(0.0, 80.0),
            vec![Primitive::CubicTo {
                ctrl1: Point::new(10.0, 60.0),
                ctrl2: Point::new(20.0, 60.0),
                end: Point::new(30.0, 80.0),
            }],
            false,
        );
        let drawing = Normalizer::new(80.0).normalize(vec![sp]);
        assert_eq!(
            drawing.subpaths[0].primitives[0],
            Primitive::CubicTo {
                ctrl1: Point::new(10.0, 20.0),
                ctrl2: Point::new(20.0, 20.0),
                end: Point::new(30.0, 0.0),
            }
        );
    }

    #[test]
    fn scale_and_offset_relocate_origin() {
        let drawing = Normalizer::new(100.0)
            .with_scale(2.0)
            .with_offset(5.0, 7.0)
            .normalize(vec![line_subpath(
                Point::new(1.0, 90.0),
                Point::new(2.0, 90.0),
            )]);
        assert_eq!(drawing.subpaths[0].start, Point::new(7.0, 27.0));
        assert_eq!(
            drawing.subpaths[0].primitives[0],
            Primitive::LineTo(Point::new(9.0, 27.0))
        );
    }

    #[test]
    fn drops_zero_length_subpaths() {
        let p = Point::new(5.0, 5.0);
        let drawing = Normalizer::new(10.0).normalize(vec![
            line_subpath(p, p),
            line_subpath(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
        ]);
        assert_eq!(drawing.len(), 1);
        assert_eq!(drawing.subpaths[0].start, Point::new(0.0, 10.0));
    }

    #[test]
    fn empty_input_yields_empty_drawing() {
        let drawing = Normalizer::new(50.0).normalize(vec![]);
        assert!(drawing.is_empty());
    }
}
