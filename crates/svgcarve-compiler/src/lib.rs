//! # SvgCarve Compiler
//!
//! The geometry-to-motion pipeline: a normalized SVG goes in, a
//! deterministic motion program comes out.
//!
//! Stages, in data-flow order:
//!
//! 1. **svg** - reads path-data strings and the page height out of an
//!    externally normalized SVG document.
//! 2. **parser** - parses the path grammar into typed sub-paths,
//!    resolving relative coordinates and shorthand commands.
//! 3. **normalizer** - converts document coordinates (Y down) to machine
//!    coordinates (Y up).
//! 4. **motion** - compiles the drawing into motion instructions,
//!    handling speeds, curve discretization, and multi-pass depth.
//! 5. **emitter** - renders the instructions to program text.
//!
//! The whole pipeline is a pure, synchronous data transformation with no
//! I/O and no shared state; independent conversions can run in parallel
//! without coordination.

pub mod emitter;
pub mod motion;
pub mod normalizer;
pub mod parser;
pub mod svg;

pub use emitter::ProgramEmitter;
pub use motion::{Instruction, MotionCompiler};
pub use normalizer::Normalizer;
pub use parser::parse_path_data;
pub use svg::{read_document, SvgDocument};
