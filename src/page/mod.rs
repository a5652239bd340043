//! Page types: metadata and kind.

mod kind;
mod meta;

pub use kind::PageKind;
pub use meta::extract_frontmatter;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
