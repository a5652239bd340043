//! `[build]` and `[styles]` sections.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"   # Source directory (relative to site root)
//! output = "public"     # Output directory (relative to site root)
//!
//! [styles]
//! enable = true         # Connect the stylesheet handlers
//! pages = true          # Annotate standalone pages too, not only articles
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section: where content is read and output is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Content directory path.
    pub content: PathBuf,
    /// Output directory path.
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
        }
    }
}

/// `[styles]` section: which signals the stylesheet handlers join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Connect any handler at all.
    pub enable: bool,
    /// Also annotate documents under `pages/`.
    pub pages: bool,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            enable: true,
            pages: true,
        }
    }
}
