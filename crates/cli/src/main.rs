mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use folder_rules::RuleLoader;

use crate::cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol in `serve` mode, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    folder_core::load_dotenv();
    let args = CliArgs::parse();

    let mut config = folder_core::Config::from_env();
    config.rules = config.rules.with_override(args.rules);
    config.log_summary();

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let loader = RuleLoader::for_directory(&config.rules, &cwd);

    match args.command {
        Command::Serve => commands::serve(&config, &cwd).await?,
        Command::Suggest {
            description,
            file_type,
            path,
        } => {
            let text = commands::suggest_text(&loader, &description, &file_type, path.as_deref())?;
            println!("{text}");
        }
        Command::Validate { path } => {
            let (text, valid) = commands::validate_path(&loader, &path)?;
            println!("{text}");
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Rules => print!("{}", commands::rules_text(&loader)?),
        Command::Init {
            dir,
            output,
            force,
            dry_run,
        } => {
            let (text, target) = commands::init(&dir, output, force, dry_run)?;
            if dry_run {
                print!("{text}");
            } else {
                println!("Wrote {}", target.display());
            }
        }
        Command::Where { json } => println!("{}", commands::where_report(&loader, &config, json)?),
    }

    Ok(())
}
