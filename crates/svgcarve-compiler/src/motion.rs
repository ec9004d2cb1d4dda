//! Motion compilation from drawings to instruction sequences.
//!
//! Walks the normalized sub-paths in document order and emits rapid travel
//! between them at movement speed and cutting traversal along them at
//! cutting speed, bracketed by tool engage/disengage instructions. Curved
//! primitives are discretized here, per curve, to the minimum number of
//! linear segments satisfying the chordal-deviation tolerance.

use lyon::geom::euclid::default::Point2D;
use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use serde::{Deserialize, Serialize};
use svgcarve_core::config::CompilerConfig;
use svgcarve_core::error::ConfigError;
use svgcarve_core::geometry::{Drawing, Point, Primitive};
use tracing::debug;

/// One motion instruction, consumed only by the emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Retract/disengage the tool.
    ToolUp,
    /// Engage the tool.
    ToolDown,
    /// Feed rate for subsequent moves, units per minute.
    SetFeedRate(f64),
    /// Non-cutting reposition.
    RapidMove(Point),
    /// Straight cut to the point.
    LinearCut(Point),
    /// Cut along a discretized curve; one segment endpoint per element,
    /// the last being the exact curve endpoint.
    CurveCut(Vec<Point>),
    /// Z move to the given depth (negative = into the material). Only
    /// present when cutting in depth passes.
    PlungeTo(f64),
}

/// Compiles a [`Drawing`] into an [`Instruction`] sequence.
#[derive(Debug)]
pub struct MotionCompiler {
    config: CompilerConfig,
    total_depth: Option<f64>,
}

impl MotionCompiler {
    /// Creates a compiler, rejecting invalid parameters before any
    /// instruction can be produced.
    pub fn new(config: CompilerConfig, total_depth: Option<f64>) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some(depth) = total_depth {
            if !depth.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: "total_depth",
                    value: depth,
                });
            }
            if depth <= 0.0 {
                return Err(ConfigError::NonPositiveTotalDepth { value: depth });
            }
        }
        Ok(Self {
            config,
            total_depth,
        })
    }

    /// Compiles the drawing. An empty drawing is a valid no-op program:
    /// just the initial retraction.
    pub fn compile(&self, drawing: &Drawing) -> Vec<Instruction> {
        // The tool always starts retracted.
        let mut program = vec![Instruction::ToolUp];
        if drawing.is_empty() {
            return program;
        }

        let depths = self.pass_depths();
        debug!(
            subpaths = drawing.len(),
            passes = depths.len(),
            "compiling drawing"
        );

        for depth in &depths {
            for subpath in &drawing.subpaths {
                program.push(Instruction::SetFeedRate(self.config.movement_speed));
                program.push(Instruction::RapidMove(subpath.start));
                program.push(Instruction::ToolDown);
                program.push(Instruction::SetFeedRate(self.config.cutting_speed));
                if let Some(z) = depth {
                    program.push(Instruction::PlungeTo(*z));
                }

                let mut pen = subpath.start;
                for primitive in &subpath.primitives {
                    program.push(self.cut_instruction(pen, primitive));
                    pen = primitive.end();
                }

                program.push(Instruction::ToolUp);
            }
        }

        program
    }

    fn cut_instruction(&self, pen: Point, primitive: &Primitive) -> Instruction {
        match primitive {
            Primitive::LineTo(end) => Instruction::LinearCut(*end),
            Primitive::CubicTo { ctrl1, ctrl2, end } => {
                let segment = CubicBezierSegment {
                    from: Point2D::new(pen.x, pen.y),
                    ctrl1: Point2D::new(ctrl1.x, ctrl1.y),
                    ctrl2: Point2D::new(ctrl2.x, ctrl2.y),
                    to: Point2D::new(end.x, end.y),
                };
                let mut points: Vec<Point> = segment
                    .flattened(self.config.curve_tolerance)
                    .map(|p| Point::new(p.x, p.y))
                    .collect();
                if points.is_empty() {
                    points.push(*end);
                }
                Instruction::CurveCut(points)
            }
            Primitive::QuadraticTo { ctrl, end } => {
                let segment = QuadraticBezierSegment {
                    from: Point2D::new(pen.x, pen.y),
                    ctrl: Point2D::new(ctrl.x, ctrl.y),
                    to: Point2D::new(end.x, end.y),
                };
                let mut points: Vec<Point> = segment
                    .flattened(self.config.curve_tolerance)
                    .map(|p| Point::new(p.x, p.y))
                    .collect();
                if points.is_empty() {
                    points.push(*end);
                }
                Instruction::CurveCut(points)
            }
        }
    }

    /// Z level for each pass: `None` for single-pass surface work, the
    /// final pass clamped to the total depth rather than overshooting.
    fn pass_depths(&self) -> Vec<Option<f64>> {
        if self.config.pass_depth == 0.0 {
            if self.total_depth.is_some() {
                debug!("total depth ignored: pass_depth 0 means surface mode");
            }
            return vec![None];
        }

        let total = self.total_depth.unwrap_or(self.config.pass_depth);
        let passes = ((total / self.config.pass_depth).ceil()).max(1.0) as usize;
        (1..=passes)
            .map(|pass| Some(-((pass as f64 * self.config.pass_depth).min(total))))
            .collect()
    }
}
