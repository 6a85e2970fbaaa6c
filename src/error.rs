use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneSearchError {
    #[error("Could not read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid configuration '{path}': {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl GeneSearchError {
    pub fn read(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn write(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn read_error_names_the_path() {
        let err = GeneSearchError::read(
            "missing/sequences.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let text = err.to_string();
        assert!(text.contains("missing/sequences.txt"));
        assert!(text.contains("no such file"));
    }
}
