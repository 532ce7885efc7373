use crate::error::{Result, StyleguideError};
use crate::resolve::{resolve, Kind};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a file as UTF-8 text, dropping a leading byte-order mark.
fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| StyleguideError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

pub fn load_description(path: &Path) -> Result<String> {
    let file = resolve(path, Kind::Description)?;
    read_text(&file)
}

pub fn load_functions(path: &Path) -> Result<String> {
    let file = resolve(path, Kind::Functions)?;
    read_text(&file)
}

pub fn load_rules(path: &Path) -> Result<Value> {
    let file = resolve(path, Kind::Rules)?;
    let text = read_text(&file)?;
    serde_json::from_str(&text).map_err(|source| StyleguideError::MalformedRules {
        path: file,
        source,
    })
}
