use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn xlogfile_path(dglroot: &Path) -> PathBuf {
    dglroot.join("nh361").join("var").join("xlogfile")
}

pub fn userdata_dir(dglroot: &Path) -> PathBuf {
    dglroot.join("dgldir").join("userdata")
}

pub fn default_font_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("unable to resolve data directory")?;
    Ok(base.join("halloffame").join("font.txt"))
}
