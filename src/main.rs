//! Copyscan CLI
//!
//! The entry point for the copyright-scanning agent. Handles CLI args,
//! builds the agent state from config and flags, runs the scan, and
//! reports the findings.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use copyscan::config::{self, resolve_path};
use copyscan::matcher::{default_matchers, parse_matcher_spec};
use copyscan::report::ScanReport;
use copyscan::scanner::scan_path;
use copyscan::state::{AgentState, Database};
use copyscan::types::{default_config, LogLevel, MatchType, ScanConfig};

const VERSION: &str = "0.1.0";

/// Copyscan -- Copyright Scanning Agent
#[derive(Parser, Debug)]
#[command(
    name = "copyscan",
    version = VERSION,
    about = "Copyright scanning agent",
    long_about = "Scans files for copyright statements, email addresses, URLs, and author attributions."
)]
struct Cli {
    /// Files or directories to scan
    paths: Vec<String>,

    /// Agent id recorded with this run
    #[arg(long, default_value_t = 0)]
    agent_id: i32,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Comma-separated match types to enable (statement,email,url,author)
    #[arg(long)]
    types: Option<String>,

    /// Additional matcher, repeatable. Format: [id[:type]=]pattern
    #[arg(long = "regex", value_name = "SPEC")]
    regexes: Vec<String>,

    /// Emit the report as JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Persist findings to the configured database
    #[arg(long)]
    store: bool,

    /// Show current configuration and database summary
    #[arg(long)]
    status: bool,

    /// Write the active configuration to ~/.copyscan/config.json
    #[arg(long)]
    init_config: bool,
}

/// Pick the tracing level: `-v` flags win, otherwise the configured default.
fn effective_level(verbosity: u8, config: &ScanConfig) -> &'static str {
    match verbosity {
        0 => match config.log_level {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        },
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("copyscan={level}")))
        .with_writer(std::io::stderr)
        .init();
}

// ---- Status Command ---------------------------------------------------------

/// Display the current configuration and findings database summary.
fn show_status(config: &ScanConfig) {
    let config_path = config::get_config_path();
    let db_path = resolve_path(&config.db_path);

    let runs = if std::path::Path::new(&db_path).exists() {
        Database::open(&db_path)
            .and_then(|db| db.run_count())
            .unwrap_or(0)
    } else {
        0
    };

    let types: Vec<&str> = config.default_types.iter().map(|t| t.as_str()).collect();

    println!(
        r#"
=== COPYSCAN STATUS ===
Config:     {} ({})
Types:      {}
Max size:   {} bytes
DB Path:    {}
Scan runs:  {}
Version:    {}
=======================
"#,
        config_path.display(),
        if config_path.exists() { "present" } else { "defaults" },
        types.join(","),
        config.max_file_size,
        db_path,
        runs,
        config.version,
    );
}

// ---- State Construction -----------------------------------------------------

/// Parse the `--types` CSV into match types.
fn parse_types(csv: &str) -> Result<Vec<MatchType>> {
    let mut types = Vec::new();
    for name in csv.split(',') {
        let mt = MatchType::parse(name)
            .with_context(|| format!("unknown match type: '{}'", name.trim()))?;
        if !types.contains(&mt) {
            types.push(mt);
        }
    }
    Ok(types)
}

/// Build the agent state: built-in matchers for the enabled types first,
/// then any user-supplied matchers, in the order given on the command line.
fn build_state(cli: &Cli, config: &ScanConfig) -> Result<AgentState> {
    let types = match &cli.types {
        Some(csv) => parse_types(csv)?,
        None => config.default_types.clone(),
    };

    let mut state = AgentState::new(cli.agent_id, cli.verbose as i32);

    for matcher in default_matchers(&types) {
        state.add_matcher(matcher);
    }

    for spec in &cli.regexes {
        let matcher =
            parse_matcher_spec(spec).with_context(|| format!("bad --regex argument: {spec}"))?;
        state.add_matcher(matcher);
    }

    info!(
        agent_id = state.agent_id(),
        matchers = state.regex_matchers().len(),
        "agent state built"
    );

    Ok(state)
}

// ---- Main Run ---------------------------------------------------------------

fn run(cli: &Cli, config: &ScanConfig) -> Result<()> {
    if cli.init_config {
        config::save_config(config)?;
        println!("Wrote {}", config::get_config_path().display());
        return Ok(());
    }

    if cli.status {
        show_status(config);
        return Ok(());
    }

    if cli.paths.is_empty() {
        bail!("no paths given; run \"copyscan --help\" for usage");
    }

    let state = build_state(cli, config)?;

    let mut report = ScanReport::new(state.agent_id());
    for path in &cli.paths {
        let results =
            scan_path(&state, path, config).with_context(|| format!("failed to scan {path}"))?;
        report.add_files(results);
    }

    if cli.store {
        let db_path = resolve_path(&config.db_path);
        let db = Database::open(&db_path)?;
        let run_id = db.insert_run(state.agent_id())?;

        for file in &report.files {
            for m in &file.matches {
                db.insert_finding(run_id, &file.path, m)?;
            }
        }
        db.finish_run(
            run_id,
            report.files_scanned() as u64,
            report.total_matches() as u64,
        )?;
        info!(run_id, db_path = %db_path, "findings stored");
    }

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        report.print_human();
    }

    Ok(())
}

// ---- Entry Point -----------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    let config = config::load_config().unwrap_or_else(default_config);
    init_tracing(effective_level(cli.verbose, &config));

    if let Err(e) = run(&cli, &config) {
        eprintln!("Fatal: {e:#}");
        std::process::exit(1);
    }
}
