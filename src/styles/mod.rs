//! Per-page stylesheet links.
//!
//! - `format`: comma-separated list -> formatted `<link>` strings
//! - `tags`: the page-context handler writing `styles` into metadata

mod format;
mod tags;

pub use format::{SITE_URL_PLACEHOLDER, STYLESHEET_LINK, format_links};
pub use tags::{CSS_KEY, STYLES_KEY, add_tags};
