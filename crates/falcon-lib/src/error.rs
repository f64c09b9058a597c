use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the falcon library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is raised before a search starts. The search itself is total:
/// an arrival that cannot happen is reported as `None`, never as an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A route record has an empty endpoint or a non-positive travel time.
    #[error("invalid route #{index}: {reason}")]
    InvalidRoute { index: usize, reason: String },

    /// A bounty hunter record has an empty planet or a negative day.
    #[error("invalid bounty hunter record #{index}: {reason}")]
    InvalidHazardRecord { index: usize, reason: String },

    /// An input document could not be parsed or failed shape validation.
    #[error("failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Wrapper for SQLite errors raised while reading a routes database.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
