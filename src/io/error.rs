//! Error types for solver and driver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and driver operations
///
/// The three construction/solve variants map onto the failure taxonomy the
/// solver promises: configuration problems mean reconfigure, invalid state
/// means the caller misused an API, a contradiction means discard this grid
/// and retry the run.
#[derive(Debug)]
pub enum CollapseError {
    /// Invalid catalog data or grid dimensions at construction time
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// `collapse` was invoked on a cell that cannot be collapsed
    ///
    /// Caller error, fatal to the call only; do not invoke again on the
    /// same cell.
    InvalidState {
        /// Cell x coordinate
        x: usize,
        /// Cell y coordinate
        y: usize,
        /// What made the call invalid
        reason: String,
    },

    /// A cell's candidate set emptied during propagation
    ///
    /// The generation attempt is unsatisfiable from here; the grid should
    /// be discarded and the whole solve retried with a new seed or
    /// starting cell.
    Contradiction {
        /// Cell x coordinate of the emptied cell
        x: usize,
        /// Cell y coordinate of the emptied cell
        y: usize,
    },

    /// Failed to load a tile art image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for CollapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState { x, y, reason } => {
                write!(f, "Invalid collapse of cell ({x}, {y}): {reason}")
            }
            Self::Contradiction { x, y } => {
                write!(f, "Contradiction: cell ({x}, {y}) has no remaining candidates")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
        }
    }
}

impl std::error::Error for CollapseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, CollapseError>;

/// Create a configuration error
pub fn configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollapseError {
    CollapseError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid state error for a cell
pub fn invalid_state(x: usize, y: usize, reason: &str) -> CollapseError {
    CollapseError::InvalidState {
        x,
        y,
        reason: reason.to_string(),
    }
}
