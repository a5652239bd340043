//! End-of-pass handler mirroring `content/css` into `output/css`.

use crate::error::Result;
use crate::hooks::Generator;
use crate::log;

use super::copy::copy_resources;

/// Content subfolder holding authored stylesheets, also the output folder name.
pub const CSS_DIR: &str = "css";

/// Extension of files picked up from [`CSS_DIR`].
pub const CSS_EXT: &str = "css";

/// Copy every stylesheet under `<content>/css` to `<output>/css`.
///
/// Connected to the article-finalized signal. Re-running it overwrites the
/// same files, so the output ends up identical.
pub fn move_resources(generator: &dyn Generator) -> Result<()> {
    let files = generator.get_files(CSS_DIR, &[CSS_EXT]);
    let dest = generator.output_path().join(CSS_DIR);

    copy_resources(generator.content_path(), &dest, &files)?;

    if !files.is_empty() {
        log!("assets"; "copied {} stylesheet(s) to {}", files.len(), dest.display());
    }
    Ok(())
}
