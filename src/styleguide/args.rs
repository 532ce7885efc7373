use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use styleguide::config::{DEFAULT_API_HOST, DEFAULT_VK_URL};

#[derive(Parser, Debug)]
#[command(name = "styleguide")]
#[command(about = "Validate API descriptions against the Apiary styleguide service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Apiary API key
    #[arg(long, env = "APIARY_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Apiary API host
    #[arg(long, global = true, default_value = DEFAULT_API_HOST)]
    pub api_host: String,

    /// Proxy for all requests
    #[arg(long, env = "http_proxy", global = true)]
    pub proxy: Option<String>,

    /// Validation endpoint URL
    #[arg(long, global = true, default_value = DEFAULT_VK_URL)]
    pub vk_url: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a local API description against the styleguide
    #[command(alias = "v")]
    Validate {
        /// API description file, or a directory holding it
        #[arg(long, default_value = ".")]
        add: PathBuf,

        /// Functions file, or a directory containing functions.js
        #[arg(long, default_value = ".")]
        functions: PathBuf,

        /// Rules file, or a directory containing rules.json
        #[arg(long, default_value = ".")]
        rules: PathBuf,

        /// Report every assertion, not only the failing ones
        #[arg(long)]
        full_report: bool,
    },

    /// Download the remote rules and functions for local editing
    Fetch,
}
