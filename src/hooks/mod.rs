//! Host integration points.
//!
//! This module provides:
//! - `signal`: the traits a host generator implements (`Generator`,
//!   `SignalRegistry`) and the signals it fires
//! - `register`: connects the stylesheet handlers to a host

mod signal;

pub use signal::*;

use crate::asset::move_resources;
use crate::config::StylesConfig;
use crate::styles::add_tags;

/// Connect the stylesheet handlers to a host.
///
/// | Signal             | Handler          | Condition      |
/// |--------------------|------------------|----------------|
/// | `ArticleContext`   | `add_tags`       | always         |
/// | `PageContext`      | `add_tags`       | `styles.pages` |
/// | `ArticleFinalized` | `move_resources` | always         |
///
/// Nothing is connected when `styles.enable` is false.
pub fn register<R: SignalRegistry + ?Sized>(registry: &mut R, config: &StylesConfig) {
    if !config.enable {
        return;
    }

    registry.connect_context(ContextSignal::ArticleContext, add_tags);
    if config.pages {
        registry.connect_context(ContextSignal::PageContext, add_tags);
    }
    registry.connect_finalized(FinalizedSignal::ArticleFinalized, move_resources);
}
