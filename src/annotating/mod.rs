//! Token classification and position-indexed overlays

mod classifier;
mod overlay;

// Re-export all public symbols
pub use classifier::*;
pub use overlay::*;
