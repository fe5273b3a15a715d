// Fixed text templates for the two reports. The wording matches the
// reports that the tool has always produced, so changes here are visible
// to downstream consumers of the text files.

use rust_decimal::RoundingStrategy;

use summary_stats::{BudgetSummary, PollSummary};

pub fn budget_report(summary: &BudgetSummary) -> String {
    let total = summary
        .total_profit
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let average = summary
        .average_change
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let lines = [
        "Financial Analysis".to_string(),
        "-".repeat(28),
        format!("Total Months: {}", summary.month_count),
        format!("Total: ${}", total),
        format!("Average Change: ${:.2}", average),
        format!(
            "Greatest Increase in Profits: {} (${})",
            summary.greatest_increase.period, summary.greatest_increase.amount
        ),
        format!(
            "Greatest Decrease in Profits: {} (${})",
            summary.greatest_decrease.period, summary.greatest_decrease.amount
        ),
    ];
    lines.join("\n")
}

pub fn election_report(summary: &PollSummary) -> String {
    let bar = "-".repeat(25);
    let mut lines: Vec<String> = vec![
        "Election Results".to_string(),
        bar.clone(),
        format!("Total Votes: {}", summary.total_votes),
        bar.clone(),
    ];
    for t in summary.tallies.iter() {
        lines.push(format!("{}: {:.2}% ({})", t.name, t.percentage, t.votes));
    }
    lines.push(bar.clone());
    lines.push(format!("Winner: {}", summary.winner));
    lines.push(bar);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use summary_stats::{run_budget_stats, run_election_stats, BudgetRecord, VoteRecord};

    fn rec(period: &str, profit: i64) -> BudgetRecord {
        BudgetRecord {
            period: period.to_string(),
            profit: Decimal::from(profit),
        }
    }

    fn vote(candidate: &str) -> VoteRecord {
        VoteRecord {
            ballot_id: "0".to_string(),
            county: "Any".to_string(),
            candidate: candidate.to_string(),
        }
    }

    #[test]
    fn budget_report_matches_the_template() {
        let records = vec![rec("month1", 100), rec("month2", 150), rec("month3", 120)];
        let summary = run_budget_stats(&records).unwrap();
        let expected = "Financial Analysis\n\
            ----------------------------\n\
            Total Months: 3\n\
            Total: $370\n\
            Average Change: $10.00\n\
            Greatest Increase in Profits: month2 ($50)\n\
            Greatest Decrease in Profits: month3 ($-30)";
        assert_eq!(budget_report(&summary), expected);
    }

    #[test]
    fn budget_report_rounds_the_money_lines() {
        let records = vec![
            BudgetRecord {
                period: "m1".to_string(),
                profit: "100.60".parse().unwrap(),
            },
            BudgetRecord {
                period: "m2".to_string(),
                profit: "101.33".parse().unwrap(),
            },
        ];
        let summary = run_budget_stats(&records).unwrap();
        let report = budget_report(&summary);
        // 201.93 rounds up to 202, the single change of 0.73 is the average.
        assert!(report.contains("Total: $202"), "report: {}", report);
        assert!(report.contains("Average Change: $0.73"), "report: {}", report);
    }

    #[test]
    fn election_report_matches_the_template() {
        let votes: Vec<VoteRecord> = ["A", "B", "A", "C", "A", "B"].iter().map(|c| vote(c)).collect();
        let summary = run_election_stats(&votes).unwrap();
        let expected = "Election Results\n\
            -------------------------\n\
            Total Votes: 6\n\
            -------------------------\n\
            A: 50.00% (3)\n\
            B: 33.33% (2)\n\
            C: 16.67% (1)\n\
            -------------------------\n\
            Winner: A\n\
            -------------------------";
        assert_eq!(election_report(&summary), expected);
    }
}
