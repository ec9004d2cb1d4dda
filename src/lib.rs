//! # SvgCarve
//!
//! Compile flattened SVG drawings into motion programs (generic G-code)
//! for hobby CNC routers, laser cutters, and pen plotters.
//!
//! ## Architecture
//!
//! SvgCarve is organized as a workspace:
//!
//! 1. **svgcarve-core** - geometry data model, compiler configuration,
//!    unit helpers, error taxonomy
//! 2. **svgcarve-compiler** - document reader, path grammar parser,
//!    coordinate normalizer, motion compiler, program emitter
//! 3. **svgcarve** - this facade crate, tying the stages together
//!
//! ## Input contract
//!
//! The pipeline consumes the output of an external normalization step: an
//! SVG whose geometry lives entirely in `<path>` elements with shapes,
//! groups, and transforms already resolved (for example, a plain-SVG
//! export). Any conforming producer satisfies the contract.
//!
//! ## Example
//!
//! ```
//! use svgcarve::{svg_to_program, CompilerConfig};
//!
//! let svg = r#"<svg viewBox="0 0 100 100"><path d="M 10 10 L 90 90"/></svg>"#;
//! let program = svg_to_program(svg, &CompilerConfig::default(), None).unwrap();
//! assert!(program.starts_with("M5\n"));
//! ```

pub use svgcarve_core::{
    parse_svg_length, CompilerConfig, ConfigError, CoordinateSpace, DocumentError, Drawing,
    Error, LengthUnit, ParseError, Point, Primitive, Result, SubPath,
};

pub use svgcarve_compiler::{
    parse_path_data, read_document, Instruction, MotionCompiler, Normalizer, ProgramEmitter,
    SvgDocument,
};

/// Compile a normalized drawing into motion-program text.
///
/// This is the single compiler invocation: config validation happens
/// before any instruction is produced, and either the full rendered text
/// is returned or no output at all.
pub fn compile_drawing(
    drawing: &Drawing,
    config: &CompilerConfig,
    total_depth: Option<f64>,
) -> Result<String> {
    let compiler = MotionCompiler::new(config.clone(), total_depth)?;
    let instructions = compiler.compile(drawing);
    Ok(ProgramEmitter::new().emit(&instructions))
}

/// Run the whole pipeline on a normalized SVG string.
pub fn svg_to_program(
    svg: &str,
    config: &CompilerConfig,
    total_depth: Option<f64>,
) -> Result<String> {
    let document = read_document(svg)?;

    let mut subpaths = Vec::new();
    for data in &document.path_data {
        subpaths.extend(parse_path_data(data)?);
    }

    let drawing = Normalizer::new(document.page_height).normalize(subpaths);
    compile_drawing(&drawing, config, total_depth)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
