//! Tabflow Demo
//!
//! Headless host: builds the default document, attaches the controller and
//! replays a click script, printing one JSON report per step.

mod script;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tabflow_core::Config;

use script::Step;
use state::AppState;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (JSON); defaults apply to every missing field
    config: Option<PathBuf>,

    /// Click script (JSON list of steps); a built-in script runs if omitted
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tabflow_core::init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let steps: Vec<Step> = match &cli.script {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            serde_json::from_str(&json).context("Invalid script")?
        }
        None => script::default_script(),
    };

    let state = AppState::new(config);
    tracing::info!(steps = steps.len(), "Running click script");

    let mut failures = 0;
    for step in steps {
        let report = script::run_step(&state, step);
        if !report.success {
            failures += 1;
        }
        println!("{}", serde_json::to_string(&report)?);
    }

    tracing::info!(failures = failures, "Script finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_paths_are_optional() {
        let cli = Cli::try_parse_from(["tabflow-demo"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.script.is_none());

        let cli = Cli::try_parse_from(["tabflow-demo", "cfg.json", "run.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.script, Some(PathBuf::from("run.json")));
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["tabflow-demo", "a", "b", "c"]).is_err());
    }
}
