/// A top-level section: `# Heading`.
///
/// Opens a scope that stays open until the transpiler pops it.
pub struct Section;

impl Section {
    pub const TAG: &'static str = "#";
    pub const OPEN: &'static str = "<section>\n";
    pub const CLOSE: &'static str = "</section>\n";
}

/// A subheading inside the current scope: `## Heading`.
pub struct Subsection;

impl Subsection {
    pub const TAG: &'static str = "##";
}
