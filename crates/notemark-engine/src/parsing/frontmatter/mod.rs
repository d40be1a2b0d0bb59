//! Frontmatter extraction.
//!
//! ```text
//! --------
//! date: 2024-01-15
//! title: My Post
//! style: tufte
//! --------
//! ```
//!
//! Lines before the opening delimiter are skipped. The extractor stops right
//! after the closing delimiter, so the caller can keep pulling body lines from
//! the same iterator.

pub mod keys;

pub use keys::{Delimiter, FrontmatterKey};

use crate::models::{Metadata, ParseOptions};
use crate::parsing::ParseError;
use crate::parsing::rope::LineRef;

/// How far the extractor got through the frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterState {
    /// Both delimiters were found.
    Closed,
    /// The block was opened but input ended before the closing delimiter.
    Unterminated,
    /// No opening delimiter anywhere; every line was consumed.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub metadata: Metadata,
    pub state: FrontmatterState,
}

/// Consumes the frontmatter block from `lines` and returns the metadata found.
pub fn extract<I>(lines: &mut I, options: &ParseOptions) -> Result<Frontmatter, ParseError>
where
    I: Iterator<Item = LineRef>,
{
    let mut metadata = Metadata::default();

    if !lines.any(|lr| Delimiter::matches(lr.content())) {
        if options.strict {
            return Err(ParseError::MissingFrontmatter);
        }
        log::warn!("no frontmatter delimiter found, document body will be empty");
        return Ok(Frontmatter {
            metadata,
            state: FrontmatterState::Missing,
        });
    }

    for lr in lines.by_ref() {
        let line = lr.content();
        if Delimiter::matches(line) {
            return Ok(Frontmatter {
                metadata,
                state: FrontmatterState::Closed,
            });
        }
        apply_line(&mut metadata, &lr, options)?;
    }

    if options.strict {
        return Err(ParseError::UnterminatedFrontmatter);
    }
    log::warn!("frontmatter block is never closed, keeping partial metadata");
    Ok(Frontmatter {
        metadata,
        state: FrontmatterState::Unterminated,
    })
}

/// Splits `key: value` at the first colon. All spaces go from the key, only
/// surrounding ones from the value. Without a colon the whole line is the key.
pub fn split_entry(line: &str) -> (String, &str) {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    let key = key.chars().filter(|c| *c != ' ').collect();
    (key, value.trim_matches(' '))
}

/// Leading-integer conversion: optional sign then digits, `0` if there are none
/// or the number does not fit.
pub fn parse_time(value: &str) -> i64 {
    let bytes = value.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    value[..sign_len + digits].parse().unwrap_or(0)
}

fn apply_line(
    metadata: &mut Metadata,
    lr: &LineRef,
    options: &ParseOptions,
) -> Result<(), ParseError> {
    if lr.content().trim().is_empty() {
        return Ok(());
    }

    let (key, value) = split_entry(lr.content());
    match FrontmatterKey::resolve(&key) {
        Some(FrontmatterKey::Time) => metadata.publish_time = parse_time(value),
        Some(FrontmatterKey::Title) => metadata.title = value.to_string(),
        Some(FrontmatterKey::Style) => metadata.style = value.to_string(),
        None if options.strict => {
            return Err(ParseError::UnrecognizedKey {
                line: lr.number,
                key,
            });
        }
        None => log::debug!("line {}: ignoring frontmatter key '{key}'", lr.number),
    }
    Ok(())
}
