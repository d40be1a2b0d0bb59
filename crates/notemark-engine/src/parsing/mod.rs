//! # Parsing
//!
//! Turns article source into a [`Document`] in one forward pass over its lines.
//!
//! ## Phases
//!
//! 1. **Frontmatter** (`frontmatter`): consumes lines up to and including the
//!    closing `--------` delimiter and fills in [`Metadata`](crate::Metadata)
//! 2. **Body** (`blocks`): every remaining line is classified by its leading tag
//!    and fed to a `BodyTranspiler`, which keeps an explicit stack of open
//!    sections instead of recursing
//! 3. **Inline** (`inline`): paragraph text is scanned for `[[#...]]` sidenotes
//!    and `[[@...]]` margin notes
//!
//! Unrecognised input is dropped and logged unless [`ParseOptions::strict`] is
//! set, in which case the first problem aborts the document.

pub mod blocks;
pub mod frontmatter;
pub mod inline;
pub mod rope;

use xi_rope::Rope;

use crate::models::{Document, ParseOptions};
use blocks::{BodyTranspiler, LineClassifier};
use rope::lines_with_spans;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: unrecognized frontmatter key '{key}'")]
    UnrecognizedKey { line: usize, key: String },
    #[error("line {line}: unrecognized block tag '{tag}'")]
    UnrecognizedTag { line: usize, tag: String },
    #[error("line {line}: note close marker outside a paragraph")]
    StrayCloseNote { line: usize },
    #[error("line {line}: unknown note kind after '[[' at byte {offset}")]
    UnknownNoteKind { line: usize, offset: usize },
    #[error("line {line}: note opened at byte {offset} is never closed")]
    UnclosedNote { line: usize, offset: usize },
    #[error("no frontmatter block found")]
    MissingFrontmatter,
    #[error("frontmatter block is never closed")]
    UnterminatedFrontmatter,
}

/// Parses a complete article source into a [`Document`].
///
/// Running this twice over the same input yields identical documents.
pub fn parse_document(source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let rope = Rope::from(source);
    let mut lines = lines_with_spans(&rope);

    let frontmatter = frontmatter::extract(&mut lines, options)?;

    let classifier = LineClassifier;
    let mut transpiler = BodyTranspiler::new(*options);
    for lr in lines {
        let lc = classifier.classify(&lr);
        transpiler.push(&lc)?;
    }

    Ok(Document::new(frontmatter.metadata, transpiler.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionNesting;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "--------\ntitle: Test\nstyle: plain\n--------\n";

    fn body(src: &str) -> String {
        parse_document(&format!("{HEADER}{src}"), &ParseOptions::default())
            .unwrap()
            .body_html
    }

    #[test]
    fn metadata_and_body_are_both_filled() {
        let doc = parse_document(
            "--------\ndate: 2024-03-01\ntitle: Hello\nstyle: tufte\n--------\np Hi\n",
            &ParseOptions::default(),
        )
        .unwrap();

        assert_eq!(doc.metadata.title, "Hello");
        assert_eq!(doc.metadata.style, "tufte");
        assert_eq!(doc.metadata.publish_time, 2024);
        assert_eq!(doc.body_html, "<p>\nHi</p>\n");
    }

    #[test]
    fn section_wraps_everything_after_it() {
        let html = body("# Intro\n## Detail\np Text\n");
        assert_eq!(
            html,
            "<section>\n<h1>Intro</h1>\n<h2>Detail</h2>\n<p>\nText</p>\n</section>\n"
        );
    }

    #[test]
    fn later_sections_nest_by_default() {
        let html = body("# One\n# Two\n");
        assert_eq!(
            html,
            "<section>\n<h1>One</h1>\n<section>\n<h1>Two</h1>\n</section>\n</section>\n"
        );
    }

    #[test]
    fn sibling_sections_close_the_previous_one() {
        let options = ParseOptions {
            sections: SectionNesting::Sibling,
            ..ParseOptions::default()
        };
        let doc = parse_document(&format!("{HEADER}# One\np a\n# Two\np b\n"), &options).unwrap();
        assert_eq!(
            doc.body_html,
            "<section>\n<h1>One</h1>\n<p>\na</p>\n</section>\n\
             <section>\n<h1>Two</h1>\n<p>\nb</p>\n</section>\n"
        );
    }

    #[test]
    fn missing_frontmatter_gives_empty_body() {
        let doc = parse_document("# Heading\np text\n", &ParseOptions::default()).unwrap();
        assert_eq!(doc.body_html, "");
        assert_eq!(doc.metadata, Default::default());
    }

    #[test]
    fn strict_mode_rejects_missing_frontmatter() {
        let result = parse_document("p text\n", &ParseOptions::strict());
        assert_eq!(result, Err(ParseError::MissingFrontmatter));
    }

    #[test]
    fn strict_mode_reports_line_of_unknown_tag() {
        let result = parse_document(&format!("{HEADER}p ok\nx nope\n"), &ParseOptions::strict());
        assert_eq!(
            result,
            Err(ParseError::UnrecognizedTag {
                line: 6,
                tag: "x".to_string()
            })
        );
    }

    #[test]
    fn reparsing_is_byte_identical() {
        let src = format!("{HEADER}# S\np a [[#n]] b [[@m]]\n## T\np c\n");
        let first = parse_document(&src, &ParseOptions::default()).unwrap();
        let second = parse_document(&src, &ParseOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}
