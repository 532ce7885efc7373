use clap::Parser;
use colored::*;
use std::path::Path;
use styleguide::commands::{fetch, validate};
use styleguide::config::Config;
use styleguide::error::{Result, StyleguideError};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        // Auth-parse failures keep their own prefix, everything else
        // goes through the single Error: channel.
        match e {
            StyleguideError::AuthParse(_) => eprintln!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    match cli.command {
        Commands::Validate { .. } => handle_validate(&config),
        Commands::Fetch => handle_fetch(&config),
    }
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config {
        api_key: cli.connection.api_key.clone(),
        api_host: cli.connection.api_host.clone(),
        proxy: cli.connection.proxy.clone(),
        vk_url: cli.connection.vk_url.clone(),
        ..Config::default()
    };

    if let Commands::Validate {
        add,
        functions,
        rules,
        full_report,
    } = &cli.command
    {
        config.add = add.clone();
        config.functions = functions.clone();
        config.rules = rules.clone();
        config = config.with_full_report(*full_report);
    }

    config
}

fn handle_validate(config: &Config) -> Result<()> {
    let verdict = validate::run(config)?;
    let pretty = serde_json::to_string_pretty(&verdict)
        .map_err(|_| StyleguideError::ResultParse(verdict.to_string()))?;
    println!("{}", pretty);
    Ok(())
}

fn handle_fetch(config: &Config) -> Result<()> {
    let outcome = fetch::run(config, Path::new("."))?;
    println!(
        "{}",
        format!(
            "`{}` and `{}` have been successfully created",
            outcome.functions_file.display(),
            outcome.rules_file.display()
        )
        .green()
    );
    Ok(())
}
