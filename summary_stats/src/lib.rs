mod config;
use log::{debug, info};

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

pub use crate::config::*;

/// Number of decimal places kept for vote percentages.
const PERCENTAGE_DECIMALS: u32 = 2;

/// Computes the summary statistics of a budget ledger.
///
/// The records must be in chronological order. Each change is the profit
/// of a period minus the profit of the previous one, and it is attributed
/// to the later period. When several changes share the extreme value, the
/// first one in sequence order is reported.
///
/// A ledger with fewer than two periods has no changes and is rejected.
pub fn run_budget_stats(records: &[BudgetRecord]) -> Result<BudgetSummary, SummaryErrors> {
    info!("run_budget_stats: processing {:?} budget records", records.len());
    if records.is_empty() {
        return Err(SummaryErrors::EmptyDataset);
    }
    if records.len() < 2 {
        return Err(SummaryErrors::NotEnoughRecords);
    }

    let month_count = records.len();
    let mut total_profit = Decimal::ZERO;
    for r in records.iter() {
        total_profit += r.profit;
    }

    let changes = profit_changes(records);
    debug!("run_budget_stats: changes: {:?}", changes);

    let mut total_change = Decimal::ZERO;
    for c in changes.iter() {
        total_change += c.amount;
    }
    let average_change = total_change / Decimal::from(changes.len() as u64);

    // Only a strictly better change displaces the current extremum, so
    // the first occurrence wins on ties.
    let mut greatest_increase = changes[0].clone();
    let mut greatest_decrease = changes[0].clone();
    for c in changes[1..].iter() {
        if c.amount > greatest_increase.amount {
            greatest_increase = c.clone();
        }
        if c.amount < greatest_decrease.amount {
            greatest_decrease = c.clone();
        }
    }

    Ok(BudgetSummary {
        month_count,
        total_profit,
        changes,
        average_change,
        greatest_increase,
        greatest_decrease,
    })
}

// First-order forward differences of the profits, one entry per
// consecutive pair of records.
fn profit_changes(records: &[BudgetRecord]) -> Vec<PeriodChange> {
    let mut changes: Vec<PeriodChange> = Vec::with_capacity(records.len() - 1);
    for pair in records.windows(2) {
        changes.push(PeriodChange {
            period: pair[1].period.clone(),
            amount: pair[1].profit - pair[0].profit,
        });
    }
    changes
}

/// Tallies the votes of an election and declares the winner by popular
/// vote.
///
/// Candidates appear in the summary in order of first appearance in the
/// input. Percentages are exact decimal shares of the total, rounded to
/// two decimal places with midpoints going away from zero. When several
/// candidates share the highest count, the one seen first wins.
pub fn run_election_stats(votes: &[VoteRecord]) -> Result<PollSummary, SummaryErrors> {
    info!("run_election_stats: processing {:?} votes", votes.len());
    if votes.is_empty() {
        return Err(SummaryErrors::EmptyDataset);
    }

    let total_votes = votes.len() as u64;
    let counts = tally_candidates(votes)?;
    for (name, count) in counts.iter() {
        info!("Candidate: {}: {}", name, count);
    }

    let total = Decimal::from(total_votes);
    let tallies: Vec<CandidateTally> = counts
        .iter()
        .map(|(name, count)| CandidateTally {
            name: name.clone(),
            votes: *count,
            percentage: (Decimal::from(*count) * Decimal::ONE_HUNDRED / total)
                .round_dp_with_strategy(
                    PERCENTAGE_DECIMALS,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
        })
        .collect();

    // Only a strictly higher count displaces the current winner, so the
    // first candidate seen wins on ties.
    let mut winner = &tallies[0];
    for t in tallies[1..].iter() {
        if t.votes > winner.votes {
            winner = t;
        }
    }
    let winner = winner.name.clone();
    debug!("run_election_stats: winner: {:?}", winner);

    Ok(PollSummary {
        total_votes,
        tallies,
        winner,
    })
}

// Per-candidate counts, in order of first appearance. The counter for a
// candidate starts at zero the first time the name is encountered.
fn tally_candidates(votes: &[VoteRecord]) -> Result<Vec<(String, u64)>, SummaryErrors> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();
    for v in votes.iter() {
        if v.candidate.is_empty() {
            return Err(SummaryErrors::BlankCandidate);
        }
        match positions.get(&v.candidate) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(v.candidate.clone(), counts.len());
                counts.push((v.candidate.clone(), 1));
            }
        }
    }
    Ok(counts)
}
