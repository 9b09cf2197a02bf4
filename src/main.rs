use clap::{Parser, ValueEnum};
use serde::Serialize;
use sprint_capacity::capacity::CapacityResult;
use sprint_capacity::model::{Member, Result, Sprint};
use sprint_capacity::report::MarkdownReport;
use sprint_capacity::session::Session;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sprint-capacity")]
#[command(about = "Calculate team sprint capacity (8 hrs = 1 day)")]
struct Args {
    #[arg(long = "sprint", default_value = "sprint.json")]
    sprint_path: String,
    #[arg(long = "members", default_value = "members.json")]
    members_path: String,
    /// Sprint name, overrides the sprint config
    #[arg(long)]
    name: Option<String>,
    /// Team name, overrides the sprint config
    #[arg(long)]
    team: Option<String>,
    #[arg(long = "total-persons", allow_negative_numbers = true)]
    total_persons: Option<f64>,
    #[arg(long = "productive-hours", allow_negative_numbers = true)]
    productive_hours: Option<f64>,
    #[arg(long = "working-days", allow_negative_numbers = true)]
    working_days: Option<f64>,
    #[arg(long = "holidays", allow_negative_numbers = true)]
    holidays: Option<f64>,
    /// Output printed to stdout
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,
    /// Write `<sprint>_capacity.csv` into the export directory
    #[arg(long)]
    csv: bool,
    /// Write the Markdown report `<team>.md` into the export directory
    #[arg(long)]
    report: bool,
    #[arg(long = "export-dir", default_value = ".")]
    export_dir: PathBuf,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sprint: &'a Sprint,
    result: &'a CapacityResult,
}

/// Logs go to stderr, stdout carries the report.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "sprint_capacity=warn".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let sprint = apply_overrides(load_sprint(&args.sprint_path)?, args);
    let roster = load_members(&args.members_path)?;

    let session = Session::new(sprint, roster).calculate();
    if let Some(err) = session.error() {
        return Err(err.into());
    }
    let Some(result) = session.result() else {
        return Err("No capacity result was produced".into());
    };

    match args.format {
        Format::Markdown => print!("{}", result.report_markdown(session.sprint())?),
        Format::Json => {
            let report = JsonReport {
                sprint: session.sprint(),
                result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if args.csv {
        if let Some(export) = session.export() {
            export.write_to(&args.export_dir)?;
        }
    }
    if args.report {
        result.report_create(session.sprint(), &args.export_dir)?;
    }

    Ok(())
}

fn load_sprint(path: &str) -> Result<Sprint> {
    if !Path::new(path).exists() {
        tracing::info!("Sprint config `{}` not found, using command line values", path);
        return Ok(Sprint::blank());
    }
    let sprint = Sprint::from_config(path)?;
    tracing::debug!("Read sprint config `{}`", path);
    Ok(sprint)
}

fn load_members(path: &str) -> Result<Vec<Member>> {
    if !Path::new(path).exists() {
        tracing::info!("Members config `{}` not found, calculating without a roster", path);
        return Ok(vec![]);
    }
    let members = Member::from_config(path)?;
    tracing::debug!("Read members config `{}` ({} members)", path, members.len());
    Ok(members)
}

fn apply_overrides(mut sprint: Sprint, args: &Args) -> Sprint {
    if let Some(name) = &args.name {
        sprint.name = name.clone();
    }
    if let Some(team) = &args.team {
        sprint.team = team.clone();
    }
    let parameters = &mut sprint.parameters;
    if let Some(value) = args.total_persons {
        parameters.total_persons = value;
    }
    if let Some(value) = args.productive_hours {
        parameters.productive_hours_per_day = value;
    }
    if let Some(value) = args.working_days {
        parameters.working_days = value;
    }
    if let Some(value) = args.holidays {
        parameters.holidays = value;
    }
    sprint
}
