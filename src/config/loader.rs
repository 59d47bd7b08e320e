//! Configuration loading
//!
//! Reads a TOML file, parses it into an [`IslandConfig`], and validates it
//! before returning. I/O, parse and validation failures are kept apart in
//! [`ConfigError`] so the binary can map them to exit codes.

use std::path::Path;

use super::validation::{self, ConfigError};
use super::IslandConfig;

/// Load an [`IslandConfig`] from a TOML file
pub fn load_from_file(path: &Path) -> Result<IslandConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: path.display().to_string(),
        source: e,
    })?;

    load_from_str(&content, &path.display().to_string())
}

/// Load an [`IslandConfig`] from TOML text
///
/// `source_name` identifies the text in error messages.
pub fn load_from_str(content: &str, source_name: &str) -> Result<IslandConfig, ConfigError> {
    let config: IslandConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
        file: source_name.to_string(),
        source: e,
    })?;

    validation::validate(&config).map_err(|errors| {
        ConfigError::Validation(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::ObjectiveKind;
    use crate::migration::topology::MigrationTopology;
    use std::io::Write;

    const VALID_TOML: &str = r#"
[algorithm]
max_generations = 500
population_size = 40
crossover_ratio = 0.8
seed = 7

[problem]
objective = "sphere"
dimensions = 5
lower = -5.12
upper = 5.12

[migration]
islands = 3
interval = 25
topology = { star = { hub_index = 1 } }
"#;

    #[test]
    fn test_load_from_str_valid_toml_succeeds() {
        let config = load_from_str(VALID_TOML, "test").expect("test: valid config");
        assert_eq!(config.algorithm.max_generations, 500);
        assert_eq!(config.algorithm.population_size, 40);
        assert_eq!(config.algorithm.crossover_ratio, 0.8);
        assert_eq!(config.algorithm.mutation_ratio, 0.1);
        assert_eq!(config.algorithm.seed, Some(7));
        assert_eq!(config.problem.objective, ObjectiveKind::Sphere);
        assert_eq!(config.problem.dimensions, 5);
        assert_eq!(
            config.migration.topology,
            MigrationTopology::Star { hub_index: 1 }
        );
    }

    #[test]
    fn test_load_from_str_invalid_toml_returns_parse_error() {
        let result = load_from_str("not valid toml [[[", "bad.toml");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_str_missing_required_key_returns_parse_error() {
        let result = load_from_str("[algorithm]\npopulation_size = 10\n", "partial.toml");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("partial.toml"));
    }

    #[test]
    fn test_load_from_str_unknown_objective_returns_parse_error() {
        let toml_str = r#"
[algorithm]
max_generations = 10
population_size = 10

[problem]
objective = "rosenbrock"
"#;
        assert!(matches!(
            load_from_str(toml_str, "objective.toml"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_from_str_validation_failure_returns_validation_error() {
        let toml_str = r#"
[algorithm]
max_generations = 10
population_size = 0

[migration]
interval = 0
"#;
        let err = load_from_str(toml_str, "zero.toml").unwrap_err();
        let ConfigError::Validation(message) = &err else {
            panic!("expected a validation error, got {:?}", err);
        };
        assert!(message.contains("algorithm.population_size"));
        assert!(message.contains("migration.interval"));
    }

    #[test]
    fn test_load_from_file_valid_toml_succeeds() {
        let dir = tempfile::tempdir().expect("test: create tempdir");
        let path = dir.path().join("island.toml");
        let mut f = std::fs::File::create(&path).expect("test: create file");
        f.write_all(VALID_TOML.as_bytes()).expect("test: write");
        drop(f);

        let config = load_from_file(&path).expect("test: load from file");
        assert_eq!(config.migration.islands, 3);
    }

    #[test]
    fn test_load_from_file_missing_file_returns_io_error() {
        let result = load_from_file(Path::new("/nonexistent/path/island.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().expect("test: create tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid [[[").expect("test: write");

        assert!(matches!(
            load_from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
