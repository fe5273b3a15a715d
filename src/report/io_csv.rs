// Primitives for reading the csv datasets.

use std::io;

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use snafu::prelude::*;

use summary_stats::{BudgetRecord, VoteRecord};

use crate::report::{
    BlankCandidateSnafu, CsvLineParseSnafu, CsvLineReadSnafu, OpeningCsvSnafu, ProfitParseSnafu,
    ReportResult,
};

// Rows are matched by position, not by header name. The header row is
// consumed by the reader and discarded.
#[derive(Debug, Deserialize)]
struct BudgetRow {
    period: String,
    profit: String,
}

#[derive(Debug, Deserialize)]
struct ElectionRow {
    ballot_id: String,
    county: String,
    candidate: String,
}

pub fn read_budget_file(path: &str) -> ReportResult<Vec<BudgetRecord>> {
    let rdr = open_csv(path)?;
    parse_budget_records(rdr)
}

pub fn read_election_file(path: &str) -> ReportResult<Vec<VoteRecord>> {
    let rdr = open_csv(path)?;
    parse_election_records(rdr)
}

fn open_csv(path: &str) -> ReportResult<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(OpeningCsvSnafu { path })
}

fn parse_budget_records<R: io::Read>(mut rdr: csv::Reader<R>) -> ReportResult<Vec<BudgetRecord>> {
    let mut res: Vec<BudgetRecord> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header occupies line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineReadSnafu { lineno })?;
        debug!("parse_budget_records: line {:?}: {:?}", lineno, line);
        let row: BudgetRow = line.deserialize(None).context(CsvLineParseSnafu { lineno })?;
        let profit: Decimal = row.profit.trim().parse().context(ProfitParseSnafu {
            lineno,
            value: row.profit.clone(),
        })?;
        res.push(BudgetRecord {
            period: row.period,
            profit,
        });
    }
    Ok(res)
}

fn parse_election_records<R: io::Read>(mut rdr: csv::Reader<R>) -> ReportResult<Vec<VoteRecord>> {
    let mut res: Vec<VoteRecord> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        let lineno = idx + 2;
        let line = line_r.context(CsvLineReadSnafu { lineno })?;
        debug!("parse_election_records: line {:?}: {:?}", lineno, line);
        let row: ElectionRow = line.deserialize(None).context(CsvLineParseSnafu { lineno })?;
        ensure!(
            !row.candidate.trim().is_empty(),
            BlankCandidateSnafu { lineno }
        );
        res.push(VoteRecord {
            ballot_id: row.ballot_id,
            county: row.county,
            candidate: row.candidate,
        });
    }
    Ok(res)
}
