use log::{debug, info};

use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use summary_stats::{run_budget_stats, run_election_stats, SummaryErrors};

pub mod io_csv;
pub mod text;

// Default locations, relative to the working directory.
const BUDGET_DATA_PATH: &str = "resources/budget_data.csv";
const BUDGET_REPORT_PATH: &str = "analysis/budget_report.txt";
const ELECTION_DATA_PATH: &str = "resources/election_data.csv";
const ELECTION_REPORT_PATH: &str = "analysis/election_report.txt";

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("could not open csv file {path}"))]
    OpeningCsv { source: csv::Error, path: String },

    #[snafu(display("could not read a csv row at line {lineno}"))]
    CsvLineRead { source: csv::Error, lineno: usize },

    #[snafu(display("malformed csv row at line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },

    #[snafu(display("could not parse profit value {value:?} at line {lineno}"))]
    ProfitParse {
        source: rust_decimal::Error,
        lineno: usize,
        value: String,
    },

    #[snafu(display("blank candidate name at line {lineno}"))]
    BlankCandidate { lineno: usize },

    #[snafu(display("analysis failed: {source}"))]
    Analysis { source: SummaryErrors },

    #[snafu(display("could not create the output directory {path}"))]
    CreatingOutputDir {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("could not write the report to {path}"))]
    WritingReport {
        source: std::io::Error,
        path: String,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Runs the budget pipeline: load the ledger, analyze it, emit the report.
pub fn run_budget(input: Option<String>, out: Option<String>) -> ReportResult<()> {
    let input = input.unwrap_or_else(|| BUDGET_DATA_PATH.to_string());
    let out = out.unwrap_or_else(|| BUDGET_REPORT_PATH.to_string());

    let records = io_csv::read_budget_file(&input)?;
    info!("run_budget: read {:?} budget records from {}", records.len(), input);

    let summary = run_budget_stats(&records).context(AnalysisSnafu {})?;
    debug!("run_budget: summary: {:?}", summary);

    emit_report(&text::budget_report(&summary), &out)
}

/// Runs the election pipeline: load the ballots, tally them, emit the report.
pub fn run_election(input: Option<String>, out: Option<String>) -> ReportResult<()> {
    let input = input.unwrap_or_else(|| ELECTION_DATA_PATH.to_string());
    let out = out.unwrap_or_else(|| ELECTION_REPORT_PATH.to_string());

    let votes = io_csv::read_election_file(&input)?;
    info!("run_election: read {:?} ballots from {}", votes.len(), input);

    let summary = run_election_stats(&votes).context(AnalysisSnafu {})?;
    debug!("run_election: summary: {:?}", summary);

    emit_report(&text::election_report(&summary), &out)
}

// Writes the report to the given path and duplicates it on the standard
// output. The output directory is created if it does not exist yet.
fn emit_report(report: &str, out_path: &str) -> ReportResult<()> {
    if let Some(parent) = Path::new(out_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context(CreatingOutputDirSnafu {
                path: parent.display().to_string(),
            })?;
        }
    }
    fs::write(out_path, format!("{}\n", report)).context(WritingReportSnafu { path: out_path })?;
    println!("{}", report);
    Ok(())
}
