//! orange_core: Core utilities shared by every stage of the Orange front end.
//!
//! Currently this is source position tracking: spans, ranges and the
//! offset-to-line mapping used when reporting diagnostics.

pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
