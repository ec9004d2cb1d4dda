//! Rendering of instruction sequences to motion-program text.
//!
//! One directive per line in a generic G-code vocabulary: `G0` rapids,
//! `G1` cuts and plunges, `M3`/`M5` tool engage/disengage, `G1 F` feed
//! selection. The emitter tracks the last emitted feed rate and only
//! re-emits the directive when the rate changes. No semantic validation
//! happens here; whatever sequence arrives is rendered faithfully, and the
//! same sequence always renders to byte-identical text.

use crate::motion::Instruction;
use svgcarve_core::geometry::Point;

/// Decimal places for X/Y/Z coordinates.
const COORD_DECIMALS: usize = 4;
/// Decimal places for feed rates.
const FEED_DECIMALS: usize = 1;

/// Renders [`Instruction`] sequences into program text.
#[derive(Debug, Clone, Default)]
pub struct ProgramEmitter;

impl ProgramEmitter {
    /// Creates an emitter.
    pub fn new() -> Self {
        Self
    }

    /// Renders the whole sequence. All-or-nothing: the emitter holds no
    /// state between calls, so identical input yields identical text.
    pub fn emit(&self, instructions: &[Instruction]) -> String {
        let mut program = String::new();
        let mut last_feed: Option<f64> = None;

        for instruction in instructions {
            match instruction {
                Instruction::ToolUp => program.push_str("M5\n"),
                Instruction::ToolDown => program.push_str("M3\n"),
                Instruction::SetFeedRate(rate) => {
                    if last_feed != Some(*rate) {
                        program.push_str(&format!("G1 F{:.*}\n", FEED_DECIMALS, rate));
                        last_feed = Some(*rate);
                    }
                }
                Instruction::RapidMove(p) => {
                    program.push_str(&format!(
                        "G0 X{} Y{}\n",
                        fmt_coord(p.x),
                        fmt_coord(p.y)
                    ));
                }
                Instruction::LinearCut(p) => {
                    program.push_str(&self.cut_line(p));
                }
                Instruction::CurveCut(points) => {
                    for p in points {
                        program.push_str(&self.cut_line(p));
                    }
                }
                Instruction::PlungeTo(z) => {
                    program.push_str(&format!("G1 Z{}\n", fmt_coord(*z)));
                }
            }
        }

        program
    }

    fn cut_line(&self, p: &Point) -> String {
        format!("G1 X{} Y{}\n", fmt_coord(p.x), fmt_coord(p.y))
    }
}

/// Fixed-precision coordinate text; negative zero renders as zero.
fn fmt_coord(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", COORD_DECIMALS, value)
}
