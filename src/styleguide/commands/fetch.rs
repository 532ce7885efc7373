use crate::client::ApiClient;
use crate::config::Config;
use crate::error::{Result, StyleguideError};
use crate::resolve::{FUNCTIONS_FILENAME, RULES_FILENAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by a successful fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub functions_file: PathBuf,
    pub rules_file: PathBuf,
}

/// Download the remote rule and function definitions and write them
/// into `out_dir` (the process cwd when invoked from the binary):
/// the functions blob verbatim, the rules structure pretty-printed.
pub fn run(config: &Config, out_dir: &Path) -> Result<FetchOutcome> {
    let api_key = config.require_api_key()?;
    let client = ApiClient::new(config)?;
    let bundle = client.fetch_assertions(api_key)?;

    let functions_file = out_dir.join(FUNCTIONS_FILENAME);
    let rules_file = out_dir.join(RULES_FILENAME);

    // Writes are not transactional; a failure on the second write
    // leaves the functions file behind without its rules counterpart.
    fs::write(&functions_file, &bundle.functions).map_err(StyleguideError::Write)?;
    let pretty = serde_json::to_string_pretty(&bundle.rules).map_err(StyleguideError::FetchParse)?;
    fs::write(&rules_file, pretty).map_err(StyleguideError::Write)?;

    Ok(FetchOutcome {
        functions_file,
        rules_file,
    })
}
