/// A paragraph line: `p Some text with [[#notes]]`.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
