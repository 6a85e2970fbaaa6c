use crate::error::GeneSearchError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const DEFAULT_SEQUENCES_PATH: &str = "sequences.txt";
pub const DEFAULT_COMMANDS_PATH: &str = "commands.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "genedata.txt";
pub const DEFAULT_AUTHOR: &str = "YourName";

/// Input and output locations of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sequences: PathBuf,
    pub commands: PathBuf,
    pub output: PathBuf,
    /// First line of the report
    pub author: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sequences: PathBuf::from(DEFAULT_SEQUENCES_PATH),
            commands: PathBuf::from(DEFAULT_COMMANDS_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl RunConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, GeneSearchError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GeneSearchError::read(path, e))?;
        serde_json::from_str(&text).map_err(|e| GeneSearchError::Config {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn with_sequences(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.sequences = path;
        }
        self
    }

    pub fn with_commands(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.commands = path;
        }
        self
    }

    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.output = path;
        }
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        if let Some(author) = author {
            self.author = author;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "author": "Ada", "output": "out/report.txt" }}"#).unwrap();
        let config = RunConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.author, "Ada");
        assert_eq!(config.output, PathBuf::from("out/report.txt"));
        assert_eq!(config.sequences, PathBuf::from(DEFAULT_SEQUENCES_PATH));
        assert_eq!(config.commands, PathBuf::from(DEFAULT_COMMANDS_PATH));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = RunConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, GeneSearchError::Config { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = RunConfig::default()
            .with_sequences(Some(PathBuf::from("seq.tsv")))
            .with_commands(None)
            .with_author(Some("Grace".to_string()));
        assert_eq!(config.sequences, PathBuf::from("seq.tsv"));
        assert_eq!(config.commands, PathBuf::from(DEFAULT_COMMANDS_PATH));
        assert_eq!(config.author, "Grace");
    }
}
