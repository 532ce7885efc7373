use crate::error::{Result, StyleguideError};
use std::path::{Path, PathBuf};

pub const RULES_FILENAME: &str = "rules.json";
pub const FUNCTIONS_FILENAME: &str = "functions.js";

/// Which resource a path is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Description,
    Rules,
    Functions,
}

impl Kind {
    /// Filename probed when the given path is a directory. The
    /// description lookup shares the functions default.
    pub fn default_filename(self) -> &'static str {
        match self {
            Kind::Rules => RULES_FILENAME,
            Kind::Functions | Kind::Description => FUNCTIONS_FILENAME,
        }
    }
}

/// Resolve `path` to a concrete file.
///
/// A regular file is returned unchanged regardless of `kind` — the
/// caller's explicit choice is trusted. A directory is probed for the
/// kind's default filename, so users can pass a project root instead
/// of individual file paths.
pub fn resolve(path: &Path, kind: Kind) -> Result<PathBuf> {
    if !path.exists() {
        return Err(StyleguideError::NotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    let candidate = path.join(kind.default_filename());
    if candidate.is_file() {
        return Ok(candidate);
    }
    Err(StyleguideError::NotFound(candidate))
}
