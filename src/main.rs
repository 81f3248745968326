//! pflake — run flake8 with configuration from pyproject.toml.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages. The process
//! exit code is flake8's own exit code on a normal run, or 2 when
//! pflake itself fails before flake8 can be invoked.

mod cli;

use pflake::config;
use pflake::constants;
use pflake::dispatch;
use pflake::env::Env;
use pflake::translate;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code.clamp(0, u8::MAX as i32) as u8),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let env = Env::real();
    let debug = env.flag(constants::ENV_DEBUG);

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let pyproject = config::find_pyproject(cli.pyproject.as_deref(), &cwd)?;
    if debug {
        eprintln!("pflake: using configuration from {}", pyproject.display());
    }

    let doc = config::load_document(&pyproject).await?;
    let section = config::extract_section(&doc);
    if debug && section.is_empty() {
        eprintln!(
            "pflake: no [tool.{}] or [tool.{}] section found, running flake8 with an empty config",
            constants::PRIMARY_SECTION,
            constants::SECONDARY_SECTION,
        );
    }

    let config_text = translate::render_ini(&section)?;
    if debug {
        eprintln!("pflake: translated configuration:\n{config_text}");
    }

    if cli.print_config {
        print!("{config_text}");
        return Ok(0);
    }

    let code = dispatch::run_flake8(&config_text, &cli.args, &env).await?;
    Ok(code)
}
