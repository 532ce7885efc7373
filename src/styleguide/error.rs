use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleguideError {
    #[error(
        "API key must be provided through the environment variable APIARY_API_KEY. \
         Go to https://login.apiary.io/tokens to obtain it."
    )]
    MissingApiKey,

    #[error("`{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("Can not read `{}`: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Can not parse rules file `{}`: {source}", .path.display())]
    MalformedRules {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Can not authenticate: {0}")]
    AuthParse(String),

    #[error("Apiary service responded with: {0}")]
    Transport(String),

    #[error("Can not fetch rules and functions: {0}")]
    FetchParse(serde_json::Error),

    #[error("Can not write into the rules/functions file: {0}")]
    Write(std::io::Error),

    #[error("Can not parse result: {0}")]
    ResultParse(String),
}

pub type Result<T> = std::result::Result<T, StyleguideError>;
