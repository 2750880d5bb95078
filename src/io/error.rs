//! Error types for configurator operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all configurator operations
///
/// Nothing here is fatal to a host process: every failure mode degrades to a
/// safe renderable default (flat grid, previous color map, zero-size grid).
#[derive(Debug)]
pub enum ConfiguratorError {
    /// Color input could not be parsed as hex, `rgb()` or a known name
    InvalidColor {
        /// The rejected input value
        value: String,
        /// Explanation of why the value is invalid
        reason: &'static str,
    },

    /// Destination quad is degenerate or the linear system is ill-conditioned
    ///
    /// Callers fall back to an unwarped rendering of the grid.
    SingularTransform {
        /// Description of the degeneracy
        reason: &'static str,
    },

    /// Pattern or mockup definition violates a structural invariant
    InvalidDefinition {
        /// Description of what's wrong with the definition
        reason: String,
    },

    /// No pattern with the requested id in the loaded set
    UnknownPattern {
        /// The requested pattern id
        id: String,
    },

    /// Failed to read a definition file from the filesystem
    DefinitionLoad {
        /// Path to the definition file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Definition file is not valid JSON for the expected shape
    DefinitionParse {
        /// Path to the definition file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered preview or mockup to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for ConfiguratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::SingularTransform { reason } => {
                write!(f, "Singular transform: {reason}")
            }
            Self::InvalidDefinition { reason } => {
                write!(f, "Invalid definition: {reason}")
            }
            Self::UnknownPattern { id } => {
                write!(f, "No pattern with id '{id}'")
            }
            Self::DefinitionLoad { path, source } => {
                write!(
                    f,
                    "Failed to read definition file '{}': {source}",
                    path.display()
                )
            }
            Self::DefinitionParse { path, source } => {
                write!(
                    f,
                    "Failed to parse definition file '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfiguratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DefinitionLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::DefinitionParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for configurator results
pub type Result<T> = std::result::Result<T, ConfiguratorError>;

/// Create an invalid color error
pub fn invalid_color(value: &impl ToString, reason: &'static str) -> ConfiguratorError {
    ConfiguratorError::InvalidColor {
        value: value.to_string(),
        reason,
    }
}

/// Create a singular transform error
pub const fn singular_transform(reason: &'static str) -> ConfiguratorError {
    ConfiguratorError::SingularTransform { reason }
}

/// Create an invalid definition error
pub fn invalid_definition(reason: impl Into<String>) -> ConfiguratorError {
    ConfiguratorError::InvalidDefinition {
        reason: reason.into(),
    }
}
