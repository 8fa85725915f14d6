//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The model argument names no class
    #[error("Model name must name a class, got '{model}'")]
    BlankModel {
        /// The model argument as given
        model: String,
    },

    /// Target file already exists and overwriting was not forced
    #[error("File already exists: {}", path.display())]
    Collision {
        /// The colliding target path
        path: PathBuf,
    },

    /// The same target path was scheduled twice in one run
    #[error("Target path scheduled more than once: {}", path.display())]
    DuplicateTarget {
        /// The duplicated target path
        path: PathBuf,
    },

    /// A template could not be parsed
    #[error("Failed to register template '{name}': {source}")]
    TemplateRegistration {
        /// Template name
        name: String,
        /// Underlying handlebars error
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A template failed to render
    #[error("Failed to render template '{name}': {source}")]
    Render {
        /// Template name
        name: String,
        /// Underlying handlebars error
        #[source]
        source: handlebars::RenderError,
    },

    /// Filesystem error
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Whether this error is a target collision
    #[must_use]
    pub const fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
