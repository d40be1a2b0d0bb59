pub mod document;
pub mod options;
pub mod site;

pub use document::{Document, Metadata};
pub use options::{ParseOptions, SectionNesting};
pub use site::SiteLayout;
