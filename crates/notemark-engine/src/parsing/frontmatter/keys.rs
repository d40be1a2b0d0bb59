/// The line that opens and closes the frontmatter block.
pub struct Delimiter;

impl Delimiter {
    pub const LINE: &'static str = "--------";

    /// Exact comparison; surrounding whitespace makes it an ordinary line.
    pub fn matches(line: &str) -> bool {
        line == Self::LINE
    }
}

/// The metadata keys the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterKey {
    Time,
    Title,
    Style,
}

impl FrontmatterKey {
    pub const TIME: &'static str = "date";
    pub const TITLE: &'static str = "title";
    pub const STYLE: &'static str = "style";

    /// Resolves an already space-stripped key token. Case sensitive.
    pub fn resolve(token: &str) -> Option<Self> {
        match token {
            Self::TIME => Some(Self::Time),
            Self::TITLE => Some(Self::Title),
            Self::STYLE => Some(Self::Style),
            _ => None,
        }
    }
}
