//! vizboard - chart container dispatch replay tool
//!
//! Replays a scenario of chart-preview requests through the container multiplexer and prints
//! what the host would mount after each step.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for mount/reset events)
    env_logger::init();

    let matches = cli().get_matches();

    let scenario_path = PathBuf::from(
        matches
            .get_one::<String>("scenario")
            .context("scenario argument is required")?,
    );
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    if !scenario_path.is_file() {
        anyhow::bail!("Scenario is not a regular file: {}", scenario_path.display());
    }

    let config = vizboard::Config::load(config_path.as_deref()).context("loading configuration")?;

    use vizboard::Application;

    let mut app = Application::new(&scenario_path, config)
        .await
        .with_context(|| format!("loading scenario {}", scenario_path.display()))?;

    // Print as we go so a failing step still shows what was mounted before it
    app.run_with(|report| print!("{report}"))?;

    if matches.get_flag("json") {
        println!("{}", app.snapshot_json()?);
    }

    Ok(())
}

/// Command-line interface definition
fn cli() -> Command {
    Command::new("vizboard")
        .version(vizboard::VERSION)
        .about("Replay chart-preview requests through the container multiplexer")
        .long_about(
            "vizboard keeps every chart container a session has shown mounted, displaying only \
             the most recently requested one. This tool replays a TOML scenario of render and \
             reset steps and prints the mounted containers after each step.",
        )
        .arg(
            Arg::new("scenario")
                .help("Path to the scenario TOML file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Configuration file (defaults to <config dir>/vizboard/config.toml)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the final registry snapshot as JSON"),
        )
}
