use clap::Parser;
use log::info;
use snafu::ErrorCompat;

mod args;
mod report;

use crate::args::{Args, Command};

fn main() {
    let args = Args::parse();
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }
    info!("args: {:?}", args);

    let res = match args.command {
        Command::Budget { input, out } => report::run_budget(input, out),
        Command::Election { input, out } => report::run_election(input, out),
    };

    if let Err(e) = res {
        eprintln!("An error occured: {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
