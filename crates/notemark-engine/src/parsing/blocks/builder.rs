use crate::models::{ParseOptions, SectionNesting};
use crate::parsing::ParseError;
use crate::parsing::inline::{InlineIssue, parse_inline};
use crate::render::html;

use super::{classify::LineClass, kinds::BlockTag, types::OpenBlock};

/// Appends body markup line by line.
///
/// Nesting is tracked with an explicit stack, so document size never grows the
/// call stack. Whatever is still open when input ends is closed by [`finish`].
///
/// [`finish`]: BodyTranspiler::finish
pub struct BodyTranspiler {
    options: ParseOptions,
    open: Vec<OpenBlock>,
    out: String,
}

impl BodyTranspiler {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            open: vec![],
            out: String::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ParseError> {
        if c.is_blank {
            return Ok(());
        }

        match c.tag {
            Some(BlockTag::Section) => self.open_section(c),
            Some(BlockTag::Subsection) => {
                html::push_subsection(&mut self.out, &c.remainder);
                Ok(())
            }
            Some(BlockTag::Paragraph) => self.paragraph(c),
            Some(BlockTag::CloseNote) => {
                if self.options.strict {
                    return Err(ParseError::StrayCloseNote { line: c.number });
                }
                log::warn!("line {}: note close marker outside a paragraph", c.number);
                Ok(())
            }
            None => {
                if self.options.strict {
                    return Err(ParseError::UnrecognizedTag {
                        line: c.number,
                        tag: c.token.clone(),
                    });
                }
                log::debug!("line {}: dropping line with tag '{}'", c.number, c.token);
                Ok(())
            }
        }
    }

    /// Closes every open block, innermost first, and returns the body markup.
    pub fn finish(mut self) -> String {
        while self.close_innermost() {}
        self.out
    }

    /// Number of currently open blocks.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn open_section(&mut self, c: &LineClass) -> Result<(), ParseError> {
        if self.options.sections == SectionNesting::Sibling {
            while self.close_innermost() {}
        }
        html::push_section_open(&mut self.out, &c.remainder);
        self.open.push(OpenBlock::Section { line: c.number });
        Ok(())
    }

    fn paragraph(&mut self, c: &LineClass) -> Result<(), ParseError> {
        let parsed = parse_inline(&c.remainder);

        for issue in &parsed.issues {
            let err = match *issue {
                InlineIssue::UnknownNoteKind { offset } => ParseError::UnknownNoteKind {
                    line: c.number,
                    offset,
                },
                InlineIssue::UnclosedNote { offset } => ParseError::UnclosedNote {
                    line: c.number,
                    offset,
                },
            };
            if self.options.strict {
                return Err(err);
            }
            log::warn!("{err}");
        }

        html::push_paragraph(&mut self.out, &c.remainder, &parsed.nodes);
        Ok(())
    }

    fn close_innermost(&mut self) -> bool {
        match self.open.pop() {
            Some(frame) => {
                self.out.push_str(frame.close_tag());
                true
            }
            None => false,
        }
    }
}
