//! Attach `<link>` tags to page metadata.

use serde_json::Value;

use crate::debug;
use crate::hooks::Generator;
use crate::page::JsonMap;

use super::format::{STYLESHEET_LINK, format_links};

/// Frontmatter key holding the author's stylesheet list.
pub const CSS_KEY: &str = "css";

/// Metadata key receiving the formatted link tags.
pub const STYLES_KEY: &str = "styles";

/// Add stylesheet link tags to a page's metadata.
///
/// Connected to the article/page context signals. When `css` is present,
/// `styles` is (re)computed from it; otherwise the metadata is left alone.
pub fn add_tags(_generator: &dyn Generator, metadata: &mut JsonMap) {
    let Some(css) = metadata.get(CSS_KEY) else {
        return;
    };

    let tags = format_links(&css_list(css), STYLESHEET_LINK);
    debug!("styles"; "{} link tag(s) from `{}`", tags.len(), css);

    let tags = tags.into_iter().map(Value::String).collect();
    metadata.insert(STYLES_KEY.into(), Value::Array(tags));
}

/// Flatten a `css` value back to its comma-separated form.
///
/// TOML frontmatter may give an array, a number or a bool; each ends up as
/// comma-separated text.
fn css_list(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(css_list)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
