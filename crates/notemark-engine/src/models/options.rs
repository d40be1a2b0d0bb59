use serde::{Deserialize, Serialize};

/// How a `#` line relates to a section that is already open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionNesting {
    /// An open section swallows every following line, later sections included.
    #[default]
    Unbounded,
    /// A new section closes the open one first.
    Sibling,
}

/// Knobs for the frontmatter extractor and body transpiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Turn recoverable problems (unknown tags, unclosed notes, ...) into errors.
    pub strict: bool,
    pub sections: SectionNesting,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
