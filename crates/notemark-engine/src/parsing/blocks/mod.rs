//! # Block Parsing
//!
//! Two-phase handling of body lines.
//!
//! 1. **Line Classification** (`classify`): each line is split at its first
//!    space into a tag token and the remaining text, and the token is resolved
//!    to a [`BlockTag`]
//! 2. **Transpiling** (`builder`): a [`BodyTranspiler`] appends markup for each
//!    classified line and tracks open sections on an explicit stack
//!
//! ## Key Invariants
//!
//! - Lines are consumed strictly in file order, one at a time
//! - Every `<section>` that is opened is closed exactly once, innermost first
//! - Unrecognised tags produce no output and never stop the scan (unless strict)

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BodyTranspiler;
pub use classify::{LineClass, LineClassifier};
pub use kinds::BlockTag;
pub use types::OpenBlock;
