//! Minimal host generator.
//!
//! `Site` is just enough of a static site generator to drive the stylesheet
//! handlers: it discovers Markdown documents, reads their frontmatter, fires
//! the context signal per document and the finalized signal per kind, and
//! writes the resulting metadata as JSON next to the would-be HTML.
//!
//! ```text
//! content/                          public/
//! ├── css/theme.css         ──>     ├── css/theme.css
//! ├── hello.md (css: theme.css) ──> ├── hello.json  { "styles": [...] }
//! └── pages/about.md        ──>     └── pages/about.json
//! ```

mod scan;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::error::StyleError;
use crate::hooks::{
    self, ContextHandler, ContextSignal, FinalizedHandler, FinalizedSignal, Generator,
    SignalRegistry,
};
use crate::page::{JsonMap, PageKind, extract_frontmatter};
use crate::styles::STYLES_KEY;
use crate::{debug, log};

pub use scan::collect_files;

/// Extension of documents the host understands.
pub const DOCUMENT_EXT: &str = "md";

/// A content document and its (possibly annotated) metadata.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the content directory.
    pub rel: PathBuf,
    pub kind: PageKind,
    pub metadata: JsonMap,
}

impl Document {
    /// Whether the stylesheet handler attached link tags.
    pub fn is_styled(&self) -> bool {
        self.metadata.contains_key(STYLES_KEY)
    }
}

/// Counts for one generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub articles: usize,
    pub pages: usize,
    pub styled: usize,
}

/// Host generator with its own signal tables.
pub struct Site {
    content: PathBuf,
    output: PathBuf,
    context_handlers: Vec<(ContextSignal, ContextHandler)>,
    finalized_handlers: Vec<(FinalizedSignal, FinalizedHandler)>,
}

impl Site {
    /// Create a host with no handlers connected.
    pub fn new(content: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            content: content.into(),
            output: output.into(),
            context_handlers: Vec::new(),
            finalized_handlers: Vec::new(),
        }
    }

    /// Create a host and connect the stylesheet handlers per `[styles]`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut site = Self::new(&config.build.content, &config.build.output);
        hooks::register(&mut site, &config.styles);
        site
    }

    /// All Markdown documents under the content directory, sorted.
    pub fn scan_documents(&self) -> Vec<PathBuf> {
        collect_files(&self.content, &[DOCUMENT_EXT])
            .into_iter()
            .filter(|path| !path.starts_with(&self.output))
            .collect()
    }

    /// Read a document and its frontmatter.
    ///
    /// Documents without frontmatter get empty metadata.
    pub fn load_document(&self, path: &Path) -> Result<Document, StyleError> {
        let source = fs::read_to_string(path).map_err(|e| StyleError::from_io(path, e))?;
        let metadata = match extract_frontmatter(&source) {
            Ok(Some((meta, _body))) => meta,
            Ok(None) => JsonMap::new(),
            Err(message) => {
                return Err(StyleError::Frontmatter {
                    path: path.to_path_buf(),
                    message,
                });
            }
        };

        let rel = path.strip_prefix(&self.content).unwrap_or(path).to_path_buf();
        Ok(Document {
            kind: PageKind::from_rel_path(&rel),
            rel,
            metadata,
        })
    }

    /// Fire the context signal matching the document's kind.
    pub fn annotate(&self, doc: &mut Document) {
        let signal = doc.kind.context_signal();
        for (connected, handler) in &self.context_handlers {
            if *connected == signal {
                handler(self, &mut doc.metadata);
            }
        }
    }

    /// Fire the finalized signal for `kind`, stopping at the first failure.
    pub fn finalize(&self, kind: PageKind) -> Result<(), StyleError> {
        let signal = kind.finalized_signal();
        for (connected, handler) in &self.finalized_handlers {
            if *connected == signal {
                debug!("site"; "{}", signal);
                handler(self)?;
            }
        }
        Ok(())
    }

    /// Run one generation pass.
    ///
    /// Articles are annotated and finalized first, then pages. Each
    /// document's metadata is written to `<output>/<rel>.json`.
    pub fn build(&self) -> Result<BuildReport> {
        let mut docs = self
            .scan_documents()
            .iter()
            .map(|path| self.load_document(path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = BuildReport::default();
        for kind in [PageKind::Article, PageKind::Page] {
            for doc in docs.iter_mut().filter(|d| d.kind == kind) {
                self.annotate(doc);
                self.write_metadata(doc)?;

                match kind {
                    PageKind::Article => report.articles += 1,
                    PageKind::Page => report.pages += 1,
                }
                if doc.is_styled() {
                    report.styled += 1;
                }
            }
            self.finalize(kind)
                .with_context(|| format!("{} failed", kind.finalized_signal()))?;
        }

        log!(
            "build";
            "{} article(s), {} page(s), {} with custom styles",
            report.articles,
            report.pages,
            report.styled
        );
        Ok(report)
    }

    /// Output path of a document's metadata JSON.
    pub fn metadata_path(&self, doc: &Document) -> PathBuf {
        self.output.join(doc.rel.with_extension("json"))
    }

    fn write_metadata(&self, doc: &Document) -> Result<()> {
        let path = self.metadata_path(doc);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&doc.metadata)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

impl Generator for Site {
    fn content_path(&self) -> &Path {
        &self.content
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn get_files(&self, subdir: &str, extensions: &[&str]) -> Vec<PathBuf> {
        collect_files(&self.content.join(subdir), extensions)
            .into_iter()
            .filter_map(|path| path.strip_prefix(&self.content).ok().map(Path::to_path_buf))
            .collect()
    }
}

impl SignalRegistry for Site {
    fn connect_context(&mut self, signal: ContextSignal, handler: ContextHandler) {
        self.context_handlers.push((signal, handler));
    }

    fn connect_finalized(&mut self, signal: FinalizedSignal, handler: FinalizedHandler) {
        self.finalized_handlers.push((signal, handler));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StylesConfig;
    use serde_json::json;
    use tempfile::TempDir;

    fn site_in(dir: &TempDir) -> Site {
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("css")).unwrap();
        fs::create_dir_all(content.join("pages")).unwrap();
        let mut site = Site::new(content, dir.path().join("public"));
        hooks::register(&mut site, &StylesConfig::default());
        site
    }

    #[test]
    fn test_get_files_relative_and_filtered() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let css = site.content_path().join("css");
        fs::create_dir_all(css.join("vendor")).unwrap();
        fs::write(css.join("b.css"), "").unwrap();
        fs::write(css.join("a.css"), "").unwrap();
        fs::write(css.join("vendor/c.css"), "").unwrap();
        fs::write(css.join("notes.txt"), "").unwrap();

        let files = site.get_files("css", &["css"]);
        assert_eq!(
            files,
            vec![
                PathBuf::from("css/a.css"),
                PathBuf::from("css/b.css"),
                PathBuf::from("css/vendor/c.css"),
            ]
        );
    }

    #[test]
    fn test_get_files_missing_subdir() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path().join("nowhere"), dir.path().join("public"));
        assert!(site.get_files("css", &["css"]).is_empty());
    }

    #[test]
    fn test_load_and_annotate_page() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let path = site.content_path().join("pages/about.md");
        fs::write(&path, "---\ntitle: About\ncss: a.css, b.css\n---\nbody").unwrap();

        let mut doc = site.load_document(&path).unwrap();
        assert_eq!(doc.kind, PageKind::Page);
        assert_eq!(doc.rel, PathBuf::from("pages/about.md"));

        site.annotate(&mut doc);
        let styles = doc.metadata[STYLES_KEY].as_array().unwrap();
        assert_eq!(styles.len(), 2);
        assert!(styles[1].as_str().unwrap().contains("%s/css/b.css"));
    }

    #[test]
    fn test_annotate_keeps_empty_css_entries() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let path = site.content_path().join("hello.md");

        for (css, expected) in [("a.css,", 2), ("a.css,,b.css", 3), (",", 2), ("1.50", 1)] {
            fs::write(&path, format!("---\ncss: {css}\n---\n")).unwrap();
            let mut doc = site.load_document(&path).unwrap();
            site.annotate(&mut doc);

            let styles = doc.metadata[STYLES_KEY].as_array().unwrap();
            assert_eq!(styles.len(), expected, "css: {css}");
        }

        let mut doc = site.load_document(&path).unwrap();
        site.annotate(&mut doc);
        assert!(doc.metadata[STYLES_KEY][0].as_str().unwrap().contains("css/1.50"));
    }

    #[test]
    fn test_pages_not_annotated_when_disabled() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("pages")).unwrap();
        let path = content.join("pages/about.md");
        fs::write(&path, "---\ncss: a.css\n---\n").unwrap();

        let mut site = Site::new(content, dir.path().join("public"));
        let config = StylesConfig {
            pages: false,
            ..Default::default()
        };
        hooks::register(&mut site, &config);

        let mut doc = site.load_document(&path).unwrap();
        site.annotate(&mut doc);
        assert!(!doc.is_styled());
    }

    #[test]
    fn test_load_document_without_frontmatter() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let path = site.content_path().join("plain.md");
        fs::write(&path, "# Just text").unwrap();

        let doc = site.load_document(&path).unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.kind, PageKind::Article);
    }

    #[test]
    fn test_load_document_bad_toml() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let path = site.content_path().join("bad.md");
        fs::write(&path, "+++\ncss = \n+++\n").unwrap();

        let err = site.load_document(&path).unwrap_err();
        assert!(matches!(err, StyleError::Frontmatter { .. }));
    }

    #[test]
    fn test_build_writes_metadata_and_copies_css() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let content = site.content_path().to_path_buf();
        fs::write(content.join("css/theme.css"), "body {}").unwrap();
        fs::write(content.join("hello.md"), "---\ncss: theme.css\n---\n").unwrap();
        fs::write(content.join("plain.md"), "no meta").unwrap();
        fs::write(content.join("pages/about.md"), "---\ntitle: About\n---\n").unwrap();

        let report = site.build().unwrap();
        assert_eq!(
            report,
            BuildReport {
                articles: 2,
                pages: 1,
                styled: 1
            }
        );

        let output = site.output_path();
        assert_eq!(
            fs::read_to_string(output.join("css/theme.css")).unwrap(),
            "body {}"
        );
        let hello: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("hello.json")).unwrap()).unwrap();
        assert_eq!(
            hello["styles"],
            json!([r#"<link rel="stylesheet" href="%s/css/theme.css" type="text/css">"#])
        );
        assert!(output.join("pages/about.json").is_file());
    }

    #[test]
    fn test_build_without_handlers_copies_nothing() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("css")).unwrap();
        fs::write(content.join("css/theme.css"), "body {}").unwrap();
        fs::write(content.join("hello.md"), "---\ncss: theme.css\n---\n").unwrap();

        let site = Site::new(&content, dir.path().join("public"));
        let report = site.build().unwrap();

        assert_eq!(report.styled, 0);
        assert!(!dir.path().join("public/css").exists());
    }
}
