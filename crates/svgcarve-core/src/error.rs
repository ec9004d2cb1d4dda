//! Error handling for svgcarve
//!
//! Provides error types for all stages of the conversion pipeline:
//! - Parse errors (path grammar)
//! - Config errors (compiler parameter validation)
//! - Document errors (normalized SVG input)
//!
//! All error types use `thiserror` for ergonomic error handling. Errors are
//! detected synchronously and returned as values; nothing is retried and no
//! partial output is produced on failure.

use thiserror::Error;

/// Path grammar parse error
///
/// Represents a terminal failure while parsing SVG path data. Every variant
/// carries the byte offset of the offending token so a caller can point at
/// the exact position in the source string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A command letter that is not part of the path grammar
    #[error("Unknown path command '{command}' at offset {offset}")]
    UnknownCommand {
        /// The unrecognized command letter.
        command: char,
        /// Byte offset of the command letter.
        offset: usize,
    },

    /// A command letter that is valid SVG but outside the supported subset
    #[error("Unsupported path command '{command}' at offset {offset}")]
    UnsupportedCommand {
        /// The unsupported command letter.
        command: char,
        /// Byte offset of the command letter.
        offset: usize,
    },

    /// A numeric literal that could not be read
    #[error("Malformed number '{token}' at offset {offset}")]
    MalformedNumber {
        /// The offending token text.
        token: String,
        /// Byte offset where the token starts.
        offset: usize,
    },

    /// A numeric literal that parsed but is not a finite value
    #[error("Non-finite number '{token}' at offset {offset}")]
    NonFiniteNumber {
        /// The offending token text.
        token: String,
        /// Byte offset where the token starts.
        offset: usize,
    },

    /// Path data ended in the middle of a command's arguments
    #[error("Unexpected end of path data at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset of the end of the data.
        offset: usize,
    },

    /// A token that cannot begin a command
    #[error("Unexpected token '{found}' at offset {offset}")]
    UnexpectedToken {
        /// The character found.
        found: char,
        /// Byte offset of the character.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset of the offending token.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnknownCommand { offset, .. }
            | Self::UnsupportedCommand { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::NonFiniteNumber { offset, .. }
            | Self::UnexpectedEnd { offset }
            | Self::UnexpectedToken { offset, .. } => *offset,
        }
    }
}

/// Compiler configuration error
///
/// Raised before compilation begins; no instructions are produced when any
/// parameter is rejected. Each variant names the offending field and value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A speed that must be strictly positive was zero or negative
    #[error("Invalid config: {field} must be positive, got {value}")]
    NonPositiveSpeed {
        /// The configuration field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Pass depth below zero
    #[error("Invalid config: pass_depth must be non-negative, got {value}")]
    NegativePassDepth {
        /// The rejected value.
        value: f64,
    },

    /// Curve flattening tolerance that is zero or negative
    #[error("Invalid config: curve_tolerance must be positive, got {value}")]
    NonPositiveTolerance {
        /// The rejected value.
        value: f64,
    },

    /// Total material depth that is zero or negative
    #[error("Invalid config: total_depth must be positive, got {value}")]
    NonPositiveTotalDepth {
        /// The rejected value.
        value: f64,
    },

    /// A parameter that is NaN or infinite
    #[error("Invalid config: {field} must be finite, got {value}")]
    NonFinite {
        /// The configuration field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Normalized document error
///
/// Represents a failure to read the externally normalized SVG input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The input text contains no `<svg>` element
    #[error("Invalid SVG: missing <svg> element")]
    MissingSvgElement,

    /// Neither a viewBox nor a height attribute supplied a page height
    #[error("Invalid SVG: no usable page height (viewBox or height attribute required)")]
    MissingPageHeight,

    /// A dimension attribute could not be read as a number
    #[error("Invalid SVG: malformed dimension '{value}'")]
    MalformedDimension {
        /// The attribute text that failed to parse.
        value: String,
    },
}

/// Main error type for svgcarve
///
/// A unified error type that can represent any failure from the pipeline.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Path grammar parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Compiler configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Normalized document error
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl Error {
    /// Check if this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
