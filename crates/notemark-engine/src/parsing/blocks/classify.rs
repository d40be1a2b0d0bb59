use crate::parsing::rope::{LineRef, Span};

use super::kinds::BlockTag;

/// Classification of a single body line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number in the source file.
    pub number: usize,
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// The text before the first space.
    pub token: String,
    /// The resolved tag, `None` when the token is not recognised.
    pub tag: Option<BlockTag>,
    /// Everything after the first space; empty when the line has none.
    pub remainder: String,
}

/// Classifies individual body lines.
pub struct LineClassifier;

impl LineClassifier {
    /// Splits a line at its first space and resolves the leading token.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let content = lr.content();
        let (token, remainder) = content.split_once(' ').unwrap_or((content, ""));

        LineClass {
            number: lr.number,
            line: lr.span,
            is_blank: content.trim().is_empty(),
            token: token.to_string(),
            tag: BlockTag::resolve(token),
            remainder: remainder.to_string(),
        }
    }
}
