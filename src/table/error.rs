//! Style table loading errors.

use std::path::PathBuf;

/// Error returned when a style table cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The JSON document is not a flat object of strings.
    #[error("{}", parse_message(path.as_ref(), message))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the JSON parser.
        message: String,
    },

    /// The table file could not be read.
    #[error("failed to read style table {}: {message}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

fn parse_message(path: Option<&PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("failed to parse style table {}: {}", p.display(), message),
        None => format!("failed to parse style table: {}", message),
    }
}
