use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input sizes for every trial plus presentation switches.
///
/// Missing keys fall back to the defaults, so an empty TOML file is the
/// stock six-trial run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub string_n: usize,
    pub search_n: usize,
    pub search_target: i64,
    pub nested_n: usize,
    pub filter_n: usize,
    pub insert_n: usize,
    pub lookup_n: usize,
    pub dict_n: usize,
    pub file_lines: usize,
    pub file_path: PathBuf,
    pub extended: bool,
    pub color: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            string_n: 5000,
            search_n: 2000,
            search_target: 1000,
            nested_n: 200,
            filter_n: 1000,
            insert_n: 1000,
            lookup_n: 2000,
            dict_n: 2000,
            file_lines: 100,
            file_path: std::env::temp_dir().join("perf_compare_test.txt"),
            extended: false,
            color: false,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded benchmark config");
        Self::from_toml_str(&content)
    }

    /// Rejects sizes that would make a trial measure nothing.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("string_n", self.string_n),
            ("search_n", self.search_n),
            ("nested_n", self.nested_n),
            ("filter_n", self.filter_n),
            ("insert_n", self.insert_n),
            ("lookup_n", self.lookup_n),
            ("dict_n", self.dict_n),
            ("file_lines", self.file_lines),
        ];

        if let Some((field, _)) = sizes.iter().find(|(_, size)| *size == 0) {
            return Err(BenchError::invalid_config(*field, "must be greater than zero"));
        }

        if self.extended && self.file_path.as_os_str().is_empty() {
            return Err(BenchError::invalid_config("file_path", "must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = BenchConfig::from_toml_str("").unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_lookup_default_and_lighter_override() {
        let config = BenchConfig::default();
        assert_eq!(config.lookup_n, 2000);

        let old_workload = BenchConfig::from_toml_str("lookup_n = 1000").unwrap();
        assert_eq!(old_workload.lookup_n, 1000);
    }

    #[test]
    fn test_partial_override() {
        let config = BenchConfig::from_toml_str("nested_n = 50\nextended = true\n").unwrap();
        assert_eq!(config.nested_n, 50);
        assert!(config.extended);
        assert_eq!(config.string_n, 5000);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = BenchConfig::from_toml_str("filter_n = 0").unwrap_err();
        match err {
            BenchError::InvalidConfig { field, .. } => assert_eq!(field, "filter_n"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = BenchConfig::from_toml_str("warmup_rounds = 3").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = BenchConfig::from_toml_str("string_n = \"lots\"").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lookup_n = 10").unwrap();
        writeln!(file, "color = true").unwrap();

        let config = BenchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lookup_n, 10);
        assert!(config.color);
    }

    #[test]
    fn test_missing_file() {
        let err = BenchConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, BenchError::ConfigRead { .. }));
    }
}
