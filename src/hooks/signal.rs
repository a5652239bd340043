//! Signals and the host-side traits they are dispatched through.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::page::JsonMap;

/// The host generator as seen by handlers.
pub trait Generator {
    /// Root of the source content tree.
    fn content_path(&self) -> &Path;

    /// Root of the generated output tree.
    fn output_path(&self) -> &Path;

    /// Files under `content_path()/subdir` whose extension is in `extensions`.
    ///
    /// Returned paths are relative to `content_path()` and sorted.
    fn get_files(&self, subdir: &str, extensions: &[&str]) -> Vec<PathBuf>;
}

/// Fired once per document after its metadata is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextSignal {
    ArticleContext,
    PageContext,
}

/// Fired once after every document of a kind has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalizedSignal {
    ArticleFinalized,
    PageFinalized,
}

impl fmt::Display for ContextSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArticleContext => f.write_str("article_generator_context"),
            Self::PageContext => f.write_str("page_generator_context"),
        }
    }
}

impl fmt::Display for FinalizedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArticleFinalized => f.write_str("article_generator_finalized"),
            Self::PageFinalized => f.write_str("page_generator_finalized"),
        }
    }
}

/// Per-document handler: may mutate the document's metadata in place.
pub type ContextHandler = fn(&dyn Generator, &mut JsonMap);

/// End-of-pass handler: side effects only, failures abort the pass.
pub type FinalizedHandler = fn(&dyn Generator) -> Result<()>;

/// A host that handlers can be connected to.
pub trait SignalRegistry {
    fn connect_context(&mut self, signal: ContextSignal, handler: ContextHandler);

    fn connect_finalized(&mut self, signal: FinalizedSignal, handler: FinalizedHandler);
}
