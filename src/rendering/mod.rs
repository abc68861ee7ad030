//! Rendering annotated source text as an HTML document

mod html;
mod theme;

// Re-export all public symbols
pub use html::*;
pub use theme::*;
