//! money_transfer - scenario runner
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────────────┐    ┌─────────┐
//! │  Config  │───▶│ Scenarios │───▶│ TransferService  │───▶│ Summary │
//! │  (YAML)  │    │   (CSV)   │    │ (validate+move)  │    │  (log)  │
//! └──────────┘    └───────────┘    └──────────────────┘    └─────────┘
//! ```
//!
//! Flags: `--env/-e <name>` (default `dev`), `--input <csv>`.

use std::process::ExitCode;

use anyhow::Result;
use money_transfer::config::AppConfig;
use money_transfer::logging::init_logging;
use money_transfer::scenario::{load_scenarios, run_all};
use money_transfer::transfer::TransferService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn get_input_override() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--input" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn run() -> Result<bool> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&app_config);

    tracing::info!(
        version = env!("GIT_HASH"),
        "Starting money_transfer in {} mode",
        env
    );

    let input = get_input_override().unwrap_or_else(|| app_config.scenarios.path.clone());
    let scenarios = load_scenarios(&input)?;
    tracing::info!("Loaded {} scenarios from {}", scenarios.len(), input);

    let summary = run_all(
        &scenarios,
        &TransferService::new(),
        app_config.scenarios.stop_on_mismatch,
    );

    println!(
        "scenarios: {} passed, {} failed",
        summary.passed, summary.failed
    );
    Ok(summary.all_passed())
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
