//! Stylesheet copying (side effects).

mod copy;
mod finalize;

pub use copy::copy_resources;
pub use finalize::{CSS_DIR, CSS_EXT, move_resources};
