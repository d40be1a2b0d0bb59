pub mod article;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use article::*;
pub use io::*;
pub use models::{document::*, options::*, site::*};
pub use parsing::{ParseError, parse_document};
