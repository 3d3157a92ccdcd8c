//! Validation settings for the `checked_*` operations.

use std::collections::HashMap;

use crate::numerics::error::{NumericsError, Result};

/// How the `checked_*` operations treat degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Return the unguarded result, non-finite cells included.
    #[default]
    Lenient,
    /// Reject singular matrices, degenerate projections and non-unit
    /// quaternions with an error.
    Strict,
}

/// Configuration for validated matrix construction and inversion.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericsConfig {
    /// Whether `checked_*` operations reject degenerate input
    pub validation: ValidationMode,
    /// Determinants with magnitude at or below this count as singular
    pub singular_epsilon: f64,
    /// Allowed deviation of a quaternion's length from 1
    pub unit_tolerance: f64,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            singular_epsilon: 1e-6,
            unit_tolerance: 1e-4,
        }
    }
}

impl NumericsConfig {
    /// Unguarded behavior; identical to the plain operations.
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.validation == ValidationMode::Strict
    }

    /// Build a configuration from a `key=value,key=value` string.
    ///
    /// Recognised keys are `validation` (`strict` or `lenient`),
    /// `singular_epsilon` and `unit_tolerance`. An empty string yields the
    /// defaults.
    pub fn from_parameters(parameters: &str) -> Result<Self> {
        let mut config = Self::default();

        if parameters.trim().is_empty() {
            return Ok(config);
        }

        for (key, value) in parse_parameters(parameters) {
            tracing::trace!(%key, %value, "numerics config parameter");
            match key.as_str() {
                "validation" => {
                    config.validation = match value.to_ascii_lowercase().as_str() {
                        "strict" => ValidationMode::Strict,
                        "lenient" => ValidationMode::Lenient,
                        other => {
                            return Err(NumericsError::InvalidParameter(format!(
                                "validation must be 'strict' or 'lenient', got '{}'",
                                other
                            )))
                        }
                    };
                }
                "singular_epsilon" => {
                    config.singular_epsilon = parse_tolerance(&key, &value)?;
                }
                "unit_tolerance" => {
                    config.unit_tolerance = parse_tolerance(&key, &value)?;
                }
                _ => {
                    return Err(NumericsError::InvalidParameter(format!(
                        "unknown parameter '{}'",
                        key
                    )));
                }
            }
        }

        Ok(config)
    }
}

fn parse_tolerance(key: &str, value: &str) -> Result<f64> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| NumericsError::InvalidParameter(format!("Invalid {}: {}", key, value)))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(NumericsError::InvalidParameter(format!(
            "{} must be a finite, non-negative number, got {}",
            key, value
        )));
    }
    Ok(parsed)
}

/// Split `key=value` pairs separated by commas.
///
/// Keys and values are trimmed. Entries without `=` or with an empty key are
/// skipped; a repeated key keeps its last value.
pub fn parse_parameters(parameters: &str) -> HashMap<String, String> {
    parameters
        .split(',')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
