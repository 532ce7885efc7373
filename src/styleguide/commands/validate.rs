use crate::client::{ApiClient, ValidationRequest};
use crate::config::Config;
use crate::error::{Result, StyleguideError};
use crate::load;
use serde_json::Value;

/// Run the full validation flow and return the service verdict.
///
/// Sequence: API-key check, token handshake, load description /
/// functions / rules, submit. The first failure aborts the whole
/// operation.
pub fn run(config: &Config) -> Result<Value> {
    let api_key = config.require_api_key()?;
    let client = ApiClient::new(config)?;
    let token = client.obtain_token(api_key)?;

    let add = load::load_description(&config.add)?;
    let functions = load::load_functions(&config.functions)?;
    let rules = load::load_rules(&config.rules)?;

    let request = ValidationRequest {
        functions,
        rules,
        add,
        failed_only: config.failed_only,
    };

    let body = client.submit_validation(&token, &request)?;
    // Keep the raw body in the error so an unparseable verdict can
    // still be diagnosed.
    serde_json::from_str(&body).map_err(|_| StyleguideError::ResultParse(body))
}
