//! Copying stylesheet files from content to output.

use std::fs;
use std::path::Path;

use filetime::{FileTime, set_file_times};

use crate::error::{Result, StyleError};

/// Copy `files` from `src` into `dest`.
///
/// ```text
/// src/css/theme.css  ─┐
/// src/css/print.css  ─┼─>  dest/theme.css
///                     └─>  dest/print.css
/// ```
///
/// - `dest` is created (with parents) if missing
/// - each file lands at `dest/<file name>`, overwriting what is there
/// - permissions and access/modification times are carried over
///
/// The first failure aborts the remaining copies; files copied before it
/// stay in place.
pub fn copy_resources<P: AsRef<Path>>(src: &Path, dest: &Path, files: &[P]) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| StyleError::from_io(dest, e))?;

    for file in files {
        let file_src = src.join(file);
        let Some(name) = file_src.file_name() else {
            return Err(StyleError::NotFound(file_src));
        };
        let file_dest = dest.join(name);
        copy_file_with_metadata(&file_src, &file_dest)?;
    }

    Ok(())
}

/// Copy one file, then mirror its permissions and timestamps.
fn copy_file_with_metadata(src: &Path, dest: &Path) -> Result<()> {
    let stat = fs::metadata(src).map_err(|e| StyleError::from_io(src, e))?;
    if !stat.is_file() {
        return Err(StyleError::NotFound(src.to_path_buf()));
    }

    fs::copy(src, dest).map_err(|e| StyleError::from_io(dest, e))?;
    fs::set_permissions(dest, stat.permissions()).map_err(|e| StyleError::from_io(dest, e))?;

    let atime = FileTime::from_last_access_time(&stat);
    let mtime = FileTime::from_last_modification_time(&stat);
    set_file_times(dest, atime, mtime).map_err(|e| StyleError::from_io(dest, e))?;

    Ok(())
}
