/// Command-line driver
pub mod cli;
/// Constants, sizes and dataset configuration
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and pixel conversion
pub mod image;
/// Directory walk and mask overlay
pub mod overlay;
/// Progress display for the driver
pub mod progress;
/// Contour and heatmap rendering
pub mod visualization;
