// ********* Input data structures ***********

use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::Display;

/// One period of a budget ledger: a time bucket label (usually a month)
/// and the profit or loss recorded for it.
///
/// Records are expected in chronological order. The analysis follows the
/// order of the input and does not attempt to parse or sort the labels.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BudgetRecord {
    pub period: String,
    pub profit: Decimal,
}

/// One cast ballot. Only the candidate name takes part in the tally, the
/// other fields are carried through for completeness.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteRecord {
    pub ballot_id: String,
    pub county: String,
    pub candidate: String,
}

// ******** Output data structures *********

/// A period-over-period profit change, attributed to the later period of
/// the pair it was computed from.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PeriodChange {
    pub period: String,
    pub amount: Decimal,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BudgetSummary {
    pub month_count: usize,
    pub total_profit: Decimal,
    /// One entry per consecutive pair of records, in input order.
    pub changes: Vec<PeriodChange>,
    pub average_change: Decimal,
    pub greatest_increase: PeriodChange,
    pub greatest_decrease: PeriodChange,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateTally {
    pub name: String,
    pub votes: u64,
    /// Share of the total votes, rounded to two decimal places.
    pub percentage: Decimal,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PollSummary {
    pub total_votes: u64,
    /// Per-candidate tallies, in order of first appearance in the input.
    pub tallies: Vec<CandidateTally>,
    pub winner: String,
}

/// Errors that prevent an analysis from completing successfully.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SummaryErrors {
    /// The dataset contains no usable rows.
    EmptyDataset,
    /// A budget ledger with a single period has no change to aggregate,
    /// so the average and the extrema are undefined.
    NotEnoughRecords,
    /// A ballot carried an empty candidate name.
    BlankCandidate,
}

impl Error for SummaryErrors {}

impl Display for SummaryErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryErrors::EmptyDataset => write!(f, "the dataset has no rows"),
            SummaryErrors::NotEnoughRecords => {
                write!(f, "at least two periods are needed to compute changes")
            }
            SummaryErrors::BlankCandidate => write!(f, "a ballot has a blank candidate name"),
        }
    }
}
