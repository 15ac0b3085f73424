//! The currently active image, kept in `~/.background/current.txt`.

use super::{Error, Result};
use std::fs;
use std::path::Path;

/// Read the current image name: the last line of the state file, or an
/// empty string if the file is empty.
pub fn read_current(state_file: &Path) -> Result<String> {
    let contents = fs::read_to_string(state_file).map_err(Error::ReadState)?;

    Ok(contents.lines().last().unwrap_or_default().to_string())
}

/// Replace the state file's contents with exactly `image`.
pub fn write_current(state_file: &Path, image: &str) -> Result<()> {
    fs::write(state_file, image).map_err(Error::WriteState)
}
