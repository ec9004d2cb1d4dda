//! Compiler configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Speed and depth parameters for one conversion.
///
/// Speeds are in machine units per minute; depths are in machine units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Feed rate for non-cutting travel between sub-paths.
    pub movement_speed: f64,
    /// Feed rate for cutting moves along sub-paths.
    pub cutting_speed: f64,
    /// Z depth removed per pass. 0 means single-pass surface work with no
    /// Z motion.
    pub pass_depth: f64,
    /// Maximum chordal deviation allowed when curves are discretized into
    /// linear cut segments.
    pub curve_tolerance: f64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            movement_speed: 3000.0,
            cutting_speed: 600.0,
            pass_depth: 0.0,
            curve_tolerance: 0.1,
        }
    }
}

impl CompilerConfig {
    /// Validates every parameter, naming the first offending field.
    ///
    /// Runs before compilation begins; a rejected config produces no
    /// instructions at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("movement_speed", self.movement_speed),
            ("cutting_speed", self.cutting_speed),
            ("pass_depth", self.pass_depth),
            ("curve_tolerance", self.curve_tolerance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.movement_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed {
                field: "movement_speed",
                value: self.movement_speed,
            });
        }
        if self.cutting_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed {
                field: "cutting_speed",
                value: self.cutting_speed,
            });
        }
        if self.pass_depth < 0.0 {
            return Err(ConfigError::NegativePassDepth {
                value: self.pass_depth,
            });
        }
        if self.curve_tolerance <= 0.0 {
            return Err(ConfigError::NonPositiveTolerance {
                value: self.curve_tolerance,
            });
        }
        Ok(())
    }
}
