//! The per-article pipeline: read, parse, wrap, write.
//!
//! Each article is handled on its own. Nothing is written unless the whole
//! page rendered, and a failing article never affects the others.

use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Component, Path, PathBuf};

use crate::io::{self, IoError};
use crate::models::{Metadata, ParseOptions, SiteLayout};
use crate::parsing::{ParseError, parse_document};
use crate::render::render_page;

#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("could not open {path}: {source}")]
    Read { path: PathBuf, source: IoError },
    #[error("could not parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("{0} has no title to name its output file after")]
    MissingTitle(PathBuf),
    #[error("{path}: title '{title}' is not a plain file name")]
    InvalidTitle { path: PathBuf, title: String },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: IoError },
}

/// A fully rendered page, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArticle {
    pub metadata: Metadata,
    /// Output file name, `{title}.html`.
    pub file_name: String,
    pub html: String,
}

/// Renders article source to a complete page in memory.
///
/// `origin` only labels errors.
pub fn render_article(
    source: &str,
    origin: &Path,
    layout: &SiteLayout,
    options: &ParseOptions,
) -> Result<RenderedArticle, ArticleError> {
    let document = parse_document(source, options).map_err(|source| ArticleError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let Some(file_name) = document.output_file_name() else {
        return Err(ArticleError::MissingTitle(origin.to_path_buf()));
    };
    if !is_plain_file_name(&document.metadata.title) {
        return Err(ArticleError::InvalidTitle {
            path: origin.to_path_buf(),
            title: document.metadata.title,
        });
    }

    let html = render_page(&document, layout);
    Ok(RenderedArticle {
        metadata: document.metadata,
        file_name,
        html,
    })
}

/// Publishes one article from the site's source directory.
///
/// Returns the path of the written page.
pub fn publish_article(
    relative_path: &RelativePath,
    layout: &SiteLayout,
    options: &ParseOptions,
) -> Result<PathBuf, ArticleError> {
    let src_path = relative_path.to_path(&layout.src_dir);
    let source = io::read_file(relative_path, &layout.src_dir).map_err(|source| {
        ArticleError::Read {
            path: src_path.clone(),
            source,
        }
    })?;

    let rendered = render_article(&source, &src_path, layout, options)?;

    let out_path = layout.output_path(&rendered.file_name);
    io::write_file(&out_path, &rendered.html).map_err(|source| ArticleError::Write {
        path: out_path.clone(),
        source,
    })?;

    log::info!("{} -> {}", src_path.display(), out_path.display());
    Ok(out_path)
}

/// Publishes every article found under the site's source directory.
///
/// Each entry pairs a source path (relative to the source directory) with its
/// own outcome.
pub fn publish_all(
    layout: &SiteLayout,
    options: &ParseOptions,
) -> Result<Vec<(RelativePathBuf, Result<PathBuf, ArticleError>)>, IoError> {
    let files = io::scan_source_files(&layout.src_dir)?;

    let results = files
        .iter()
        .filter_map(|path| relative_to(path, &layout.src_dir))
        .map(|relative| {
            let outcome = publish_article(&relative, layout, options);
            if let Err(e) = &outcome {
                log::error!("{e}");
            }
            (relative, outcome)
        })
        .collect();

    Ok(results)
}

/// True when `title` names one file directly inside the output directory.
fn is_plain_file_name(title: &str) -> bool {
    let mut components = Path::new(title).components();
    !title.contains(['/', '\\'])
        && matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
}

fn relative_to(path: &Path, root: &Path) -> Option<RelativePathBuf> {
    let stripped = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_article, create_test_site};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const POST: &str = "--------\ndate: 2024-05-01\ntitle: Hello\nstyle: tufte\n--------\n# Intro\np Body [[#note]]\n";

    #[test]
    fn test_render_article_names_output_after_title() {
        let layout = SiteLayout::from_base_dir("/site");
        let rendered =
            render_article(POST, Path::new("hello.md"), &layout, &ParseOptions::default()).unwrap();

        assert_eq!(rendered.file_name, "Hello.html");
        assert_eq!(rendered.metadata.publish_time, 2024);
        assert!(rendered.html.starts_with("<!DOCTYPE html>\n"));
        assert!(rendered.html.contains("<section>\n<h1>Intro</h1>\n"));
    }

    #[test]
    fn test_render_article_without_title_fails() {
        let layout = SiteLayout::from_base_dir("/site");
        let result = render_article(
            "--------\nstyle: tufte\n--------\np x\n",
            Path::new("untitled.md"),
            &layout,
            &ParseOptions::default(),
        );
        assert!(matches!(result, Err(ArticleError::MissingTitle(_))));
    }

    #[rstest]
    #[case("../escaped")]
    #[case("../../escaped")]
    #[case("/etc/escaped")]
    #[case("drafts/nested")]
    #[case("back\\slash")]
    #[case("..")]
    #[case(".")]
    fn test_render_article_rejects_path_like_titles(#[case] title: &str) {
        let layout = SiteLayout::from_base_dir("/site");
        let source = format!("--------\ntitle: {title}\n--------\np x\n");

        let result = render_article(&source, Path::new("odd.md"), &layout, &ParseOptions::default());

        assert!(
            matches!(&result, Err(ArticleError::InvalidTitle { title: t, .. }) if t == title),
            "{result:?}"
        );
    }

    #[test]
    fn test_publish_article_writes_page() {
        // Given a site with one article
        let (_base, layout) = create_test_site();
        create_test_article(&layout, "hello.md", POST);

        // When publishing it
        let out = publish_article(
            RelativePath::new("hello.md"),
            &layout,
            &ParseOptions::default(),
        )
        .unwrap();

        // Then the page lands in the output directory under its title
        assert_eq!(out, layout.out_dir.join("Hello.html"));
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("<title>Hello</title>"));
        assert!(written.ends_with("</html>\n\n"));
    }

    #[test]
    fn test_title_with_spaces_is_written_as_is() {
        let (_base, layout) = create_test_site();
        create_test_article(
            &layout,
            "spaced.md",
            "--------\ntitle:  My First Post \n--------\np x\n",
        );

        let out = publish_article(
            RelativePath::new("spaced.md"),
            &layout,
            &ParseOptions::default(),
        )
        .unwrap();

        assert_eq!(out, layout.out_dir.join("My First Post.html"));
        assert!(out.is_file());
    }

    #[test]
    fn test_relative_escape_title_writes_nothing() {
        // Given an article whose title climbs out of the output directory
        let (base, layout) = create_test_site();
        create_test_article(
            &layout,
            "climb.md",
            "--------\ntitle: ../../escaped\n--------\np x\n",
        );

        // When publishing it
        let result = publish_article(
            RelativePath::new("climb.md"),
            &layout,
            &ParseOptions::default(),
        );

        // Then it is rejected and nothing lands anywhere
        assert!(matches!(result, Err(ArticleError::InvalidTitle { .. })));
        assert!(!base.path().join("escaped.html").exists());
        assert!(!base.path().join("public").join("escaped.html").exists());
        assert!(!layout.out_dir.exists());
    }

    #[test]
    fn test_absolute_title_writes_nothing() {
        let (base, layout) = create_test_site();
        let target = base.path().join("abs_target");
        create_test_article(
            &layout,
            "abs.md",
            &format!("--------\ntitle: {}\n--------\np x\n", target.display()),
        );

        let result = publish_article(
            RelativePath::new("abs.md"),
            &layout,
            &ParseOptions::default(),
        );

        assert!(matches!(result, Err(ArticleError::InvalidTitle { .. })));
        assert!(!base.path().join("abs_target.html").exists());
        assert!(!layout.out_dir.exists());
    }

    #[test]
    fn test_publish_missing_source_writes_nothing() {
        let (_base, layout) = create_test_site();

        let result = publish_article(
            RelativePath::new("missing.md"),
            &layout,
            &ParseOptions::default(),
        );

        assert!(matches!(
            result,
            Err(ArticleError::Read {
                source: IoError::NotFound(_),
                ..
            })
        ));
        assert!(!layout.out_dir.exists());
    }

    #[test]
    fn test_strict_parse_failure_writes_nothing() {
        let (_base, layout) = create_test_site();
        create_test_article(
            &layout,
            "bad.md",
            "--------\ntitle: Bad\n--------\nq unknown tag\n",
        );

        let result = publish_article(RelativePath::new("bad.md"), &layout, &ParseOptions::strict());

        assert!(matches!(result, Err(ArticleError::Parse { .. })));
        assert!(!layout.out_dir.join("Bad.html").exists());
    }

    #[test]
    fn test_unwritable_output_is_reported() {
        let (_base, layout) = create_test_site();
        create_test_article(&layout, "hello.md", POST);
        // A file where the output directory should be
        std::fs::create_dir_all(layout.out_dir.parent().unwrap()).unwrap();
        std::fs::write(&layout.out_dir, "not a directory").unwrap();

        let result = publish_article(
            RelativePath::new("hello.md"),
            &layout,
            &ParseOptions::default(),
        );

        assert!(matches!(result, Err(ArticleError::Write { .. })));
    }

    #[test]
    fn test_publish_all_isolates_failures() {
        let (_base, layout) = create_test_site();
        create_test_article(&layout, "a.md", POST);
        create_test_article(&layout, "b.md", "--------\nstyle: x\n--------\np no title\n");
        create_test_article(
            &layout,
            "drafts/c.md",
            "--------\ntitle: Draft\n--------\np draft\n",
        );

        let results = publish_all(&layout, &ParseOptions::default()).unwrap();

        assert_eq!(results.len(), 3);
        let outcome = |name: &str| {
            results
                .iter()
                .find(|(rel, _)| rel.as_str() == name)
                .map(|(_, outcome)| outcome.is_ok())
        };
        assert_eq!(outcome("a.md"), Some(true));
        assert_eq!(outcome("b.md"), Some(false));
        assert_eq!(outcome("drafts/c.md"), Some(true));
        assert!(layout.out_dir.join("Hello.html").exists());
        assert!(layout.out_dir.join("Draft.html").exists());
    }
}
