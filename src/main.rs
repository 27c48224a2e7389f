// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use kalkulator_kas::{apply_pairs, render_report, DisplayConfig, Ledger, LedgerSnapshot};

fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set, so the TUI screen stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config = load_config(&mut args)?;

    if args.first().map(String::as_str) == Some("count") {
        run_count(&args[1..], &config)?;
    } else if args.is_empty() {
        run_ui_mode(config)?;
    } else {
        eprintln!("Usage: kalkulator-kas [--config <file>] [count [DENOM=QTY ...] [--json]]");
        std::process::exit(2);
    }

    Ok(())
}

/// Pull `--config <path>` out of the argument list
fn load_config(args: &mut Vec<String>) -> Result<DisplayConfig> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(DisplayConfig::default());
    };

    if pos + 1 >= args.len() {
        return Err(anyhow!("--config requires a file path"));
    }

    let path = args.remove(pos + 1);
    args.remove(pos);
    tracing::info!(path = %path, "loading display config");
    DisplayConfig::from_file(path)
}

fn run_count(args: &[String], config: &DisplayConfig) -> Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let pairs: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();

    let mut ledger = Ledger::new();
    apply_pairs(&mut ledger, &pairs)?;

    if json {
        let snapshot = LedgerSnapshot::capture(&ledger);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render_report(&ledger, config));
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: DisplayConfig) -> Result<()> {
    let mut app = ui::App::new(config);
    ui::run_ui(&mut app)?;

    println!("{}", render_report(&app.ledger, &app.config));

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: DisplayConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: kalkulator-kas count 100000=2 50000=1");
    std::process::exit(1);
}
