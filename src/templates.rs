use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Template error type
#[derive(Debug)]
pub enum TemplateError {
    IoError(std::io::Error),
    NoInstallDir,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::IoError(e) => write!(f, "IO error: {}", e),
            TemplateError::NoInstallDir => {
                write!(f, "Could not determine the executable's directory")
            }
        }
    }
}

impl Error for TemplateError {}

impl From<std::io::Error> for TemplateError {
    fn from(error: std::io::Error) -> Self {
        TemplateError::IoError(error)
    }
}

/// Load a template by name.
///
/// Relative names resolve against the directory the binary lives in, not the
/// caller's working directory, so templates can be installed next to the tool.
/// Absolute paths are used as given.
pub fn load(name: &str) -> Result<String, TemplateError> {
    let path = Path::new(name);
    if path.is_absolute() {
        return Ok(fs::read_to_string(path)?);
    }

    let dir = install_dir()?;
    load_from(&dir, name)
}

/// Load a template by name from an explicit directory.
pub fn load_from(dir: &Path, name: &str) -> Result<String, TemplateError> {
    Ok(fs::read_to_string(dir.join(name))?)
}

fn install_dir() -> Result<PathBuf, TemplateError> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(TemplateError::NoInstallDir)
}
