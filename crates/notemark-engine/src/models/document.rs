/// Metadata read from an article's frontmatter block.
///
/// Fields keep their defaults when the corresponding key never appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Page title, also used as the output file stem.
    pub title: String,
    /// Stylesheet name, resolved against the site's style directory.
    pub style: String,
    /// Leading integer of the `date` field (`2024-01-15` gives `2024`).
    pub publish_time: i64,
}

/// A parsed article: its metadata plus the generated body markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub metadata: Metadata,
    /// Generated `<article>` contents. Only appended to while transpiling.
    pub body_html: String,
}

impl Document {
    pub fn new(metadata: Metadata, body_html: String) -> Self {
        Self {
            metadata,
            body_html,
        }
    }

    /// File name the rendered page is written to, or `None` without a title.
    pub fn output_file_name(&self) -> Option<String> {
        if self.metadata.title.is_empty() {
            return None;
        }
        Some(format!("{}.html", self.metadata.title))
    }
}
