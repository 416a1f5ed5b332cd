//! Command implementations

pub mod check;
pub mod run;
pub mod scan;

use anyhow::{bail, Result};
use logstream_core::ConfigFile;
use logstream_sort::StreamScan;
use std::path::{Path, PathBuf};

/// Load the given config file, or search for one from the current directory
pub fn load_config(path: Option<&Path>) -> Result<(ConfigFile, PathBuf)> {
    match path {
        Some(path) => Ok((ConfigFile::load(path)?, path.to_path_buf())),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(ConfigFile::find_and_load(&cwd)?)
        }
    }
}

/// Turn leftover parse failures into a command error when `strict` is set
pub fn check_strict(scans: &[&StreamScan], strict: bool) -> Result<()> {
    let failed: usize = scans
        .iter()
        .filter_map(|scan| scan.errors.as_ref())
        .map(|errors| errors.len())
        .sum();

    if strict && failed > 0 {
        bail!("{} file(s) could not be parsed", failed);
    }
    Ok(())
}
