use crate::config::Config;
use crate::error::{Result, StyleguideError};
use reqwest::blocking::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const TOKEN_PATH: &str = "styleguide-cli/get-token/";
const ASSERTIONS_PATH: &str = "styleguide-cli/get-assertions/";

const USER_AGENT: &str = concat!("styleguide/", env!("CARGO_PKG_VERSION"));

/// Payload submitted to the validation endpoint. Assembled fresh per
/// `validate` call, immutable once built.
#[derive(Debug, Serialize)]
pub struct ValidationRequest {
    pub functions: String,
    pub rules: Value,
    pub add: String,
    #[serde(rename = "failedOnly")]
    pub failed_only: bool,
}

/// Rule and function definitions fetched for local editing. Both
/// blobs are opaque to this client.
#[derive(Debug)]
pub struct AssertionsBundle {
    pub functions: String,
    pub rules: Value,
}

#[derive(Deserialize)]
struct TokenResponse {
    jwt: String,
}

// The service wraps both blobs in a same-named envelope:
// {"functions": {"functions": "..."}, "rules": {"rules": {...}}}
#[derive(Deserialize)]
struct AssertionsResponse {
    functions: FunctionsEnvelope,
    rules: RulesEnvelope,
}

#[derive(Deserialize)]
struct FunctionsEnvelope {
    functions: String,
}

#[derive(Deserialize)]
struct RulesEnvelope {
    rules: Value,
}

/// One blocking HTTP client per invocation. All calls against the
/// service go through [`ApiClient::send`]; the call sites differ only
/// in URL, method, auth header and payload.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    vk_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers());

        if let Some(proxy) = &config.proxy {
            let proxy =
                reqwest::Proxy::all(proxy).map_err(|e| StyleguideError::Transport(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let http = builder
            .build()
            .map_err(|e| StyleguideError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            vk_url: config.vk_url.clone(),
        })
    }

    /// Exchange the API key for a short-lived bearer token.
    pub fn obtain_token(&self, api_key: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, TOKEN_PATH);
        let body = self.send(
            self.http
                .get(&url)
                .header("authentication", format!("Token {api_key}")),
        )?;

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| StyleguideError::AuthParse(e.to_string()))?;
        Ok(token.jwt)
    }

    /// Download the remote rule and function definitions. This call
    /// authenticates with the API key directly, not the bearer token.
    pub fn fetch_assertions(&self, api_key: &str) -> Result<AssertionsBundle> {
        let url = format!("{}/{}", self.base_url, ASSERTIONS_PATH);
        let body = self.send(
            self.http
                .get(&url)
                .header("authentication", format!("Token {api_key}")),
        )?;

        let parsed: AssertionsResponse =
            serde_json::from_str(&body).map_err(StyleguideError::FetchParse)?;
        Ok(AssertionsBundle {
            functions: parsed.functions.functions,
            rules: parsed.rules.rules,
        })
    }

    /// Submit the assembled request; returns the raw verdict body.
    pub fn submit_validation(&self, token: &str, request: &ValidationRequest) -> Result<String> {
        self.send(
            self.http
                .post(&self.vk_url)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .json(request),
        )
    }

    /// Issue one request, normalizing transport- and service-level
    /// failures. On an error status the body is probed for a JSON
    /// `message` field; either way the failure is fatal — these are
    /// interactive invocations, nothing is retried.
    fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request
            .send()
            .map_err(|e| StyleguideError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| StyleguideError::Transport(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));

        Err(match message {
            Some(message) => {
                StyleguideError::Transport(format!("{} {}", status.as_u16(), message))
            }
            None => StyleguideError::Transport(status.to_string()),
        })
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
