//! CLI interface for Sojourner.
//!
//! Designed for agents and humans alike to run rover missions from the
//! command line. Each subcommand is non-interactive: command data in,
//! report out.
//!
//! - `sojourner deploy [INPUT]` — run the mission and print the report.
//! - `sojourner check [INPUT]` — decode the roster without moving anything.
//!
//! INPUT is a file path; omit it (or pass `-`) to read from stdin.

use std::path::{Path, PathBuf};
use std::{fs, io};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::config::{self, Config};
use crate::mission::MissionControl;
use crate::model::{Command, Status};
use crate::parse::{CommandData, parse_command_data};
use crate::report::MissionReport;

/// Sojourner — deploy rovers across a plateau.
#[derive(Debug, Parser)]
#[command(name = "sojourner", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Log per-step detail to stderr.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

const WORKFLOW_HELP: &str = r#"Workflow: running a mission
  1. sojourner check plateau.txt
     → decodes the roster without moving anything
  2. sojourner deploy plateau.txt
     → runs every rover and prints the final report
  3. sojourner deploy --format json --out report.json plateau.txt

Command data:
  55           grid header: the plateau's upper-right corner
  12 N         rover start line: x digit, y digit, heading
  LMLMLMLMM    directives: L/R turn in place, M moves one cell"#;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deploy the mission: run every rover's directives in roster order.
    ///
    /// The report is written to `--out` (if given) or stdout. A one-line
    /// summary goes to stderr when writing to a file. Exits nonzero only
    /// when the mission cannot start at all.
    Deploy {
        /// Command data file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,

        /// Ground-control callsign for reports and problem alerts.
        #[arg(long)]
        location: Option<String>,

        /// Report format.
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Decode command data and print the roster without deploying.
    Check {
        /// Command data file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
}

/// Report rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Classic per-rover lines closed by the sentinel.
    Text,
    /// The full mission report as pretty-printed JSON.
    Json,
}

/// Run a parsed invocation, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Commands::Deploy {
            input,
            location,
            format,
            out,
        } => cmd_deploy(
            config,
            input.as_deref(),
            location.as_deref(),
            format,
            out.as_deref(),
        ),
        Commands::Check { input } => cmd_check(input.as_deref()),
    }
}

fn cmd_deploy(
    config: &Config,
    input: Option<&Path>,
    location: Option<&str>,
    format: Option<ReportFormat>,
    out: Option<&Path>,
) -> Result<(), String> {
    let command_data = read_command_data(input)?;
    let location = config::resolve_location(location, config);

    let mut mission = MissionControl::new(&location, &command_data);
    let status = mission.deploy_rovers();
    let report = mission.final_report();

    let format = format.or(config.format).unwrap_or(ReportFormat::Text);
    let rendered = render_report(&report, format)?;

    match out {
        Some(path) => {
            fs::write(path, &rendered)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Mission report ({status}) → {}", path.display());
        }
        None => println!("{rendered}"),
    }

    // A scrubbed mission still produces a report for the postmortem, but
    // the exit code has to say it never flew.
    if status == Status::CriticalFailure {
        return Err(report
            .details
            .unwrap_or_else(|| "mission failed critically".to_string()));
    }
    Ok(())
}

fn cmd_check(input: Option<&Path>) -> Result<(), String> {
    let command_data = read_command_data(input)?;
    let data = parse_command_data(&command_data).map_err(|e| e.to_string())?;
    print!("{}", roster_summary(&data));
    Ok(())
}

fn render_report(report: &MissionReport, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("failed to serialize report: {e}")),
    }
}

/// Human-readable roster: the grid line, then one line per rover.
fn roster_summary(data: &CommandData) -> String {
    let mut summary = format!("Grid {}\n", data.grid_size);

    if data.rovers.is_empty() {
        summary.push_str("No rovers\n");
        return summary;
    }

    for (index, rover) in data.rovers.iter().enumerate() {
        let orders = match Command::parse_sequence(&rover.command_text) {
            Some(commands) => format!("{} directive(s)", commands.len()),
            None => "invalid command codes".to_string(),
        };
        summary.push_str(&format!(
            "{index}  {} {}  {orders}\n",
            rover.position, rover.orientation
        ));
    }
    summary
}

/// Read command data from a file, or stdin when the path is `-` or absent.
fn read_command_data(input: Option<&Path>) -> Result<String, String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display())),
        _ => io::read_to_string(io::stdin())
            .map_err(|e| format!("failed to read stdin: {e}")),
    }
}
