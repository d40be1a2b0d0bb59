/// A frame on the transpiler's stack of open blocks.
///
/// Popping a frame emits its closing markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenBlock {
    Section {
        /// Line the section was opened on.
        line: usize,
    },
}

impl OpenBlock {
    pub fn close_tag(&self) -> &'static str {
        match self {
            OpenBlock::Section { .. } => super::kinds::Section::CLOSE,
        }
    }
}
