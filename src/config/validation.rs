//! Configuration validation
//!
//! ## Responsibility
//! Check the constraints on a parsed [`IslandConfig`] that the schema cannot
//! express: ranges, finite limits, and cross-field agreement.
//!
//! ## Guarantees
//! - Validation collects every violation before returning
//! - Error messages name the field path and the offending value

use super::IslandConfig;

/// Errors from reading, parsing, or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed, including a missing required key
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Source the TOML came from
        file: String,
        /// Underlying TOML deserialization error
        #[source]
        source: toml::de::Error,
    },

    /// One or more validation rules failed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A field has an out-of-range or contradictory value
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path, e.g. `migration.interval`
        field: String,
        /// The offending value
        value: String,
        /// The constraint it breaks
        reason: String,
    },

    /// File I/O error
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path that could not be read
        file: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate every semantic constraint on an [`IslandConfig`]
///
/// Returns all violations at once.
pub fn validate(config: &IslandConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Algorithm
    let algorithm = &config.algorithm;
    if algorithm.max_generations == 0 {
        errors.push(invalid("algorithm.max_generations", 0, "must be at least 1"));
    }
    if algorithm.population_size == 0 {
        errors.push(invalid("algorithm.population_size", 0, "must be at least 1"));
    }
    if !(0.0..=1.0).contains(&algorithm.crossover_ratio) {
        errors.push(invalid(
            "algorithm.crossover_ratio",
            algorithm.crossover_ratio,
            "must be between 0.0 and 1.0",
        ));
    }
    if !(0.0..=1.0).contains(&algorithm.mutation_ratio) {
        errors.push(invalid(
            "algorithm.mutation_ratio",
            algorithm.mutation_ratio,
            "must be between 0.0 and 1.0",
        ));
    }

    // Problem
    let problem = &config.problem;
    if problem.dimensions == 0 {
        errors.push(invalid("problem.dimensions", 0, "must be at least 1"));
    }
    match &problem.bounds {
        Some(pairs) => {
            if pairs.len() != problem.dimensions {
                errors.push(invalid(
                    "problem.bounds",
                    pairs.len(),
                    "must list exactly one [lower, upper] pair per dimension",
                ));
            }
            for (i, &(lower, upper)) in pairs.iter().enumerate() {
                if !lower.is_finite() || !upper.is_finite() || lower > upper {
                    errors.push(invalid(
                        &format!("problem.bounds[{}]", i),
                        format!("[{}, {}]", lower, upper),
                        "must be finite with lower <= upper",
                    ));
                }
            }
        }
        None => {
            if !problem.lower.is_finite() || !problem.upper.is_finite() {
                errors.push(invalid(
                    "problem.lower",
                    format!("[{}, {}]", problem.lower, problem.upper),
                    "lower and upper must be finite",
                ));
            } else if problem.lower > problem.upper {
                errors.push(invalid(
                    "problem.lower",
                    problem.lower,
                    "must be <= problem.upper",
                ));
            }
        }
    }

    // Migration
    let migration = &config.migration;
    if migration.islands == 0 {
        errors.push(invalid("migration.islands", 0, "must be at least 1"));
    } else if let Err(e) = migration.topology.validate(migration.islands) {
        errors.push(invalid(
            "migration.topology",
            format!("{:?}", migration.topology),
            &e.to_string(),
        ));
    }
    if migration.interval == 0 {
        errors.push(invalid("migration.interval", 0, "must be at least 1"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
