//! sasslight_core: Shared source-location types for the sasslight toolkit.
//!
//! Provides text spans, ranges, and line maps used by the scanner, the
//! dev-server layer, and the CLI.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
