use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reqres_check::{ApiClientBuilder, CaseContext, Outcome, RunSummary, Settings, cases, run_cases};
use tracing_subscriber::EnvFilter;

/// reqres-check - black-box checks for the user list and login API
#[derive(Parser)]
#[command(name = "reqres-check")]
#[command(about = "Runs the user-list and login checks against a live API")]
#[command(version)]
struct Cli {
    /// Settings file with the expected fixture values
    #[arg(short, long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Base URL of the API under test (overrides REQRES_BASE_URL)
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Only run cases whose name contains this text
    #[arg(short, long, value_name = "TEXT")]
    filter: Option<String>,

    /// List case names and exit
    #[arg(long)]
    list: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    if cli.list {
        if let Err(e) = list_cases(&mut stdout) {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
        return;
    }

    let result = execute(&cli).and_then(|summary| {
        print_summary(&mut stdout, &summary, cli.json)?;
        Ok(summary)
    });
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    std::process::exit(exit_code(&result));
}

/// 0 when every case passed, 1 when any failed, 2 when the run could not
/// be set up or reported.
fn exit_code(result: &Result<RunSummary>) -> i32 {
    match result {
        Ok(summary) if summary.all_passed() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// Logs go to stderr so the report on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads settings, builds the client and runs the selected cases.
///
/// Only setup failures are returned as errors; case failures are part of
/// the summary.
fn execute(cli: &Cli) -> Result<RunSummary> {
    let settings_path = Settings::resolve_path(cli.settings.as_deref());
    let settings = Settings::load(&settings_path).context("Failed to load settings")?;

    let mut builder = ApiClientBuilder::new();
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url);
    }
    let client = builder.build().context("Failed to create HTTP client")?;

    tracing::info!(base_url = client.base_url(), settings = %settings_path.display(), "starting run");

    let ctx = CaseContext::new(&client, &settings);
    Ok(run_cases(&cases::all(), &ctx, cli.filter.as_deref()))
}

fn list_cases(out: &mut impl Write) -> std::io::Result<()> {
    for case in cases::all() {
        writeln!(out, "{}", case.name)?;
    }
    out.flush()
}

fn print_summary(out: &mut impl Write, summary: &RunSummary, as_json: bool) -> Result<()> {
    if as_json {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    for report in &summary.reports {
        match &report.outcome {
            Outcome::Pass => writeln!(out, "PASS {} ({}ms)", report.name, report.elapsed_ms)?,
            Outcome::Fail { kind, reason } => {
                writeln!(out, "FAIL {} [{}]: {}", report.name, kind, reason)?
            }
        }
    }
    writeln!(
        out,
        "\n{} passed, {} failed, {} total",
        summary.passed(),
        summary.failed(),
        summary.total()
    )?;
    out.flush()?;

    Ok(())
}
