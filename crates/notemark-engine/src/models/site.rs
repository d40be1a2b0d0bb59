use std::path::{Path, PathBuf};

/// Directory layout of a site, derived from a single base directory.
///
/// Built once and passed by reference into the publishing functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub root_dir: PathBuf,
    /// Where article sources live.
    pub src_dir: PathBuf,
    /// Where stylesheets referenced by the `style` key live.
    pub style_dir: PathBuf,
    /// Where rendered pages are written.
    pub out_dir: PathBuf,
}

impl SiteLayout {
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let root_dir = base_dir.as_ref().to_path_buf();
        Self {
            src_dir: root_dir.join("src").join("articles"),
            style_dir: root_dir.join("res").join("styles"),
            out_dir: root_dir.join("public").join("articles"),
            root_dir,
        }
    }

    /// The `href` of the stylesheet named by an article's `style` key.
    pub fn stylesheet_href(&self, style: &str) -> String {
        self.style_dir
            .join(format!("{style}.css"))
            .to_string_lossy()
            .into_owned()
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}
