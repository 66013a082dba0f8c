//! Unified application error type.
//! Every stage (import, core, export, cli) returns AppError so that a
//! participant failure can be reported the same way wherever it happens.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input data
    // ---------------------------
    #[error("Malformed input in {}: {detail}", path.display())]
    MalformedInput { path: PathBuf, detail: String },

    #[error("Missing prerequisite: {} not found", .0.display())]
    MissingPrerequisite(PathBuf),

    #[error("No valid gaze samples in {}: every sample is missing both eyes", .0.display())]
    NoValidData(PathBuf),

    // ---------------------------
    // Batch reporting
    // ---------------------------
    #[error("participant '{name}': {source}")]
    Participant {
        name: String,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config / CLI
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn malformed(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        AppError::MalformedInput {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Point a path-less data error at the file it came from.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            AppError::NoValidData(p) if p.as_os_str().is_empty() => {
                AppError::NoValidData(path.to_path_buf())
            }
            AppError::MalformedInput { path: p, detail } if p.as_os_str().is_empty() => {
                AppError::MalformedInput {
                    path: path.to_path_buf(),
                    detail,
                }
            }
            other => other,
        }
    }

    /// Attach the participant name, unless already attached.
    pub fn for_participant(self, name: &str) -> Self {
        match self {
            AppError::Participant { .. } => self,
            other => AppError::Participant {
                name: name.to_string(),
                source: Box::new(other),
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
