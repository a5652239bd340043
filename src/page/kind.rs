//! Document kind: article or standalone page.

use std::path::Path;

use crate::hooks::{ContextSignal, FinalizedSignal};

/// Subfolder of the content tree holding standalone pages.
pub const PAGES_DIR: &str = "pages";

/// Document kind, deciding which signals fire for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// Dated entry (anything outside `pages/`).
    #[default]
    Article,
    /// Standalone page under `pages/`.
    Page,
}

impl PageKind {
    /// Classify a content-relative path.
    pub fn from_rel_path(rel: &Path) -> Self {
        match rel.components().next() {
            Some(first) if first.as_os_str() == PAGES_DIR && rel.components().count() > 1 => {
                Self::Page
            }
            _ => Self::Article,
        }
    }

    /// Signal fired once per document of this kind.
    pub const fn context_signal(self) -> ContextSignal {
        match self {
            Self::Article => ContextSignal::ArticleContext,
            Self::Page => ContextSignal::PageContext,
        }
    }

    /// Signal fired once after all documents of this kind.
    pub const fn finalized_signal(self) -> FinalizedSignal {
        match self {
            Self::Article => FinalizedSignal::ArticleFinalized,
            Self::Page => FinalizedSignal::PageFinalized,
        }
    }
}
