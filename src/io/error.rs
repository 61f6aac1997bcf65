//! Error types for mask generation, overlay and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all noise mask operations
#[derive(Debug)]
pub enum NoiseError {
    /// Covariance matrix cannot parameterize a bivariate normal distribution
    InvalidCovariance {
        /// Description of the violated requirement
        reason: String,
    },

    /// Configuration or call parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to open or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Directory traversal failed below the dataset root
    DirectoryWalk {
        /// Root of the walk
        path: PathBuf,
        /// Underlying traversal error
        source: walkdir::Error,
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

    /// Plotting backend failed to draw or encode a figure
    Render {
        /// Output path of the figure
        path: PathBuf,
        /// Backend error message
        reason: String,
    },

    /// Array shapes disagree during mask filling or overlay
    Shape {
        /// Operation that detected the mismatch
        operation: &'static str,
        /// Shape the operation required
        expected: Vec<usize>,
        /// Shape or index actually encountered
        found: Vec<usize>,
    },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCovariance { reason } => {
                write!(f, "Invalid covariance matrix: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DirectoryWalk { path, source } => {
                write!(
                    f,
                    "Failed to walk directory '{}': {source}",
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
            Self::Render { path, reason } => {
                write!(f, "Failed to render '{}': {reason}", path.display())
            }
            Self::Shape {
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: expected {expected:?}, found {found:?}"
                )
            }
        }
    }
}

impl std::error::Error for NoiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::DirectoryWalk { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for noise mask results
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NoiseError {
    NoiseError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid covariance error
pub fn invalid_covariance(reason: &impl ToString) -> NoiseError {
    NoiseError::InvalidCovariance {
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error
pub fn shape_error(operation: &'static str, expected: &[usize], found: &[usize]) -> NoiseError {
    NoiseError::Shape {
        operation,
        expected: expected.to_vec(),
        found: found.to_vec(),
    }
}
