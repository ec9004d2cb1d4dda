//! # SvgCarve Core
//!
//! Core types for svgcarve: the geometry data model shared by the
//! conversion pipeline, compiler configuration, unit helpers, and the
//! error taxonomy.

pub mod config;
pub mod error;
pub mod geometry;
pub mod units;

pub use config::CompilerConfig;
pub use error::{ConfigError, DocumentError, Error, ParseError, Result};
pub use geometry::{CoordinateSpace, Drawing, Point, Primitive, SubPath};
pub use units::{parse_svg_length, LengthUnit};
