//! tola-styles - per-page stylesheet links for static sites.
//!
//! Authors list stylesheets in a page's frontmatter:
//!
//! ```text
//! ---
//! title: Hello
//! css: theme.css, code.css
//! ---
//! ```
//!
//! and the page's metadata gains ready-to-render tags under `styles`:
//!
//! ```text
//! <link rel="stylesheet" href="%s/css/theme.css" type="text/css">
//! <link rel="stylesheet" href="%s/css/code.css" type="text/css">
//! ```
//!
//! `%s` is left for the host's template layer to fill with the site URL.
//! After a pass, everything under `content/css/` is copied to `output/css/`.
//!
//! # Modules
//!
//! | Module   | Purpose                                              |
//! |----------|------------------------------------------------------|
//! | `styles` | link tag formatting and the per-page handler         |
//! | `asset`  | stylesheet copying and the end-of-pass handler       |
//! | `hooks`  | host traits, signals and `register`                  |
//! | `site`   | minimal host driving the handlers from the CLI       |

pub mod asset;
pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logger;
pub mod page;
pub mod site;
pub mod styles;

pub use error::{Result, StyleError};
pub use hooks::register;
