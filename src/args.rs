use clap::{Parser, Subcommand};

/// Batch reporting tool for flat csv datasets.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, global = true, takes_value = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Summarizes the month-over-month profit changes of a budget ledger.
    Budget {
        /// (file path, optional) The csv file with the budget data, one (period, profit) row per
        /// month. Defaults to resources/budget_data.csv.
        #[clap(short, long, value_parser)]
        input: Option<String>,

        /// (file path, optional) Where to write the text report. Defaults to
        /// analysis/budget_report.txt.
        #[clap(short, long, value_parser)]
        out: Option<String>,
    },

    /// Tallies the votes of an election and declares the winner by popular vote.
    Election {
        /// (file path, optional) The csv file with the election data, one (ballot id, county,
        /// candidate) row per ballot. Defaults to resources/election_data.csv.
        #[clap(short, long, value_parser)]
        input: Option<String>,

        /// (file path, optional) Where to write the text report. Defaults to
        /// analysis/election_report.txt.
        #[clap(short, long, value_parser)]
        out: Option<String>,
    },
}
