//! Unit handling for SVG dimension attributes.
//!
//! SVG lengths may carry a unit suffix (`mm`, `cm`, `in`, `pt`, `pc`, `px`).
//! Page geometry is resolved to user units at the CSS ratio of 96 user units
//! per inch before any coordinate conversion happens.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User units per inch (CSS reference pixel density).
const USER_UNITS_PER_INCH: f64 = 96.0;
/// Millimeters per inch.
const MM_PER_INCH: f64 = 25.4;

/// A length unit accepted on SVG dimension attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// User units (also bare numbers).
    Px,
    /// Millimeters.
    Mm,
    /// Centimeters.
    Cm,
    /// Inches.
    In,
    /// Points (1/72 inch).
    Pt,
    /// Picas (1/6 inch).
    Pc,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Px
    }
}

impl LengthUnit {
    /// Conversion factor from this unit to user units.
    pub fn to_user_units(self) -> f64 {
        match self {
            Self::Px => 1.0,
            Self::Mm => USER_UNITS_PER_INCH / MM_PER_INCH,
            Self::Cm => USER_UNITS_PER_INCH / MM_PER_INCH * 10.0,
            Self::In => USER_UNITS_PER_INCH,
            Self::Pt => USER_UNITS_PER_INCH / 72.0,
            Self::Pc => USER_UNITS_PER_INCH / 6.0,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px => write!(f, "px"),
            Self::Mm => write!(f, "mm"),
            Self::Cm => write!(f, "cm"),
            Self::In => write!(f, "in"),
            Self::Pt => write!(f, "pt"),
            Self::Pc => write!(f, "pc"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "px" => Ok(Self::Px),
            "mm" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "in" => Ok(Self::In),
            "pt" => Ok(Self::Pt),
            "pc" => Ok(Self::Pc),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Parse an SVG length attribute value into user units.
///
/// * `input` - Attribute text, e.g. `"210mm"`, `"100"`, `" 8.5in "`
pub fn parse_svg_length(input: &str) -> Result<f64, DocumentError> {
    let input = input.trim();
    let split = input
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(input.len());
    let (number, suffix) = input.split_at(split);

    let value: f64 = number.parse().map_err(|_| DocumentError::MalformedDimension {
        value: input.to_string(),
    })?;
    if !value.is_finite() {
        return Err(DocumentError::MalformedDimension {
            value: input.to_string(),
        });
    }
    let unit =
        LengthUnit::from_str(suffix).map_err(|_| DocumentError::MalformedDimension {
            value: input.to_string(),
        })?;

    Ok(value * unit.to_user_units())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_is_user_units() {
        assert_eq!(parse_svg_length("100").unwrap(), 100.0);
        assert_eq!(parse_svg_length(" 42.5 ").unwrap(), 42.5);
    }

    #[test]
    fn millimeters_convert_at_css_ratio() {
        let height = parse_svg_length("25.4mm").unwrap();
        assert!((height - 96.0).abs() < 1e-9);
    }

    #[test]
    fn inches_and_points() {
        assert_eq!(parse_svg_length("1in").unwrap(), 96.0);
        assert_eq!(parse_svg_length("72pt").unwrap(), 96.0);
    }

    #[test]
    fn malformed_dimension_rejected() {
        assert!(parse_svg_length("abc").is_err());
        assert!(parse_svg_length("10furlong").is_err());
        assert!(parse_svg_length("50%").is_err());
        assert!(parse_svg_length("").is_err());
    }

    #[test]
    fn unit_display_round_trip() {
        for unit in [
            LengthUnit::Px,
            LengthUnit::Mm,
            LengthUnit::Cm,
            LengthUnit::In,
            LengthUnit::Pt,
            LengthUnit::Pc,
        ] {
            assert_eq!(unit.to_string().parse::<LengthUnit>().unwrap(), unit);
        }
    }
}
