//! Where a command's query text comes from: the positional argument, a file, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Exit status for unreadable input; invalid queries use 1.
pub const INPUT_ERROR_STATUS: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

/// Query text plus the path shown in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuery {
    pub source: String,
    pub path: Option<String>,
}

impl QueryInput {
    pub fn new(text: Option<String>, file: Option<PathBuf>) -> Self {
        Self { text, file }
    }

    pub fn load(&self) -> Result<LoadedQuery, InputError> {
        if let Some(text) = &self.text {
            return Ok(LoadedQuery {
                source: text.clone(),
                path: None,
            });
        }

        match &self.file {
            Some(path) if path.as_os_str() != "-" => {
                let shown = path.display().to_string();
                tracing::debug!(path = %shown, "reading query file");
                let source = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
                    path: shown.clone(),
                    source,
                })?;
                Ok(LoadedQuery {
                    source,
                    path: Some(shown),
                })
            }
            _ => {
                tracing::debug!("reading query from stdin");
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .map_err(InputError::ReadStdin)?;
                Ok(LoadedQuery {
                    source,
                    path: Some("<stdin>".to_string()),
                })
            }
        }
    }

    /// Loads the query or exits with [`INPUT_ERROR_STATUS`].
    pub fn load_or_exit(&self) -> LoadedQuery {
        match self.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(INPUT_ERROR_STATUS);
            }
        }
    }
}
