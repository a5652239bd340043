//! Query command: print annotated metadata without writing anything.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Serialize;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::page::{JsonMap, PageKind};
use crate::site::{Document, Site};

/// Result for a single queried document
#[derive(Debug, Serialize)]
pub struct PageQueryResult {
    pub path: String,
    pub kind: &'static str,
    pub meta: JsonMap,
}

/// Run the query command, writing JSON to stdout.
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let results = query_pages(args, config)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Load, annotate and filter the requested documents.
///
/// Relative paths are tried against the cwd first, then the content dir.
pub fn query_pages(args: &QueryArgs, config: &SiteConfig) -> Result<Vec<PageQueryResult>> {
    let site = Site::from_config(config);

    let paths = if args.paths.is_empty() {
        site.scan_documents()
    } else {
        args.paths
            .iter()
            .map(|p| resolve_path(p, &config.build.content))
            .collect::<Result<Vec<_>>>()?
    };

    paths
        .iter()
        .map(|path| -> Result<PageQueryResult> {
            let mut doc = site.load_document(path)?;
            site.annotate(&mut doc);
            Ok(to_result(doc, args.fields.as_deref()))
        })
        .collect()
}

fn resolve_path(path: &Path, content: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(crate::config::normalize_path(path));
    }
    let in_content = content.join(path);
    if in_content.is_file() {
        return Ok(in_content);
    }
    bail!("document `{}` not found", path.display())
}

fn to_result(doc: Document, fields: Option<&[String]>) -> PageQueryResult {
    let meta = match fields {
        Some(fields) => doc
            .metadata
            .into_iter()
            .filter(|(key, _)| fields.contains(key))
            .collect(),
        None => doc.metadata,
    };

    PageQueryResult {
        path: doc.rel.display().to_string(),
        kind: match doc.kind {
            PageKind::Article => "article",
            PageKind::Page => "page",
        },
        meta,
    }
}
