use crate::targets::{IconTarget, PWA_ICONS};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the logo inside the public directory.
pub const SOURCE_FILENAME: &str = "logoimage.png";

/// Name of the static asset directory that sits next to the tool's own directory.
pub const PUBLIC_DIR_NAME: &str = "public";

/// Where to read the logo from and where the icons go.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub targets: &'static [IconTarget],
}

impl Config {
    /// Logo and icons both live in `public_dir`.
    pub fn for_public_dir(public_dir: &Path) -> Self {
        Self {
            source: public_dir.join(SOURCE_FILENAME),
            output_dir: public_dir.to_path_buf(),
            targets: PWA_ICONS,
        }
    }

    /// Use `public_dir` when given, otherwise the `public/` directory
    /// beside the one holding the running executable.
    pub fn resolve(public_dir: Option<PathBuf>) -> Result<Self> {
        let public_dir = match public_dir {
            Some(dir) => dir,
            None => default_public_dir()?,
        };
        Ok(Self::for_public_dir(&public_dir))
    }
}

fn default_public_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Can't locate the running executable")?;
    public_dir_for_exe(&exe)
}

fn public_dir_for_exe(exe: &Path) -> Result<PathBuf> {
    let project_root = exe
        .parent()
        .and_then(Path::parent)
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(project_root.join(PUBLIC_DIR_NAME))
}
