//! Common types shared by the markup, style and conversion layers.

// Submodule declarations
pub mod error;
pub mod style;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{FontColor, RGBColor};
