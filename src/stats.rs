//! Aggregate computations over the respondent table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dataset::{AFFIRMATIVE, Respondent};

/// Arithmetic mean of an integer column selected from each record.
/// Returns 0.0 for an empty table.
pub fn compute_average<F>(table: &[Respondent], select: F) -> f64
where
    F: Fn(&Respondent) -> u32,
{
    if table.is_empty() {
        return 0.0;
    }
    let sum: u64 = table.iter().map(|r| select(r) as u64).sum();
    sum as f64 / table.len() as f64
}

/// Percentage of records whose selected categorical value equals
/// `affirmative` exactly (case-sensitive). Returns 0.0 for an empty table.
pub fn compute_affirmative_percentage<F>(table: &[Respondent], select: F, affirmative: &str) -> f64
where
    F: Fn(&Respondent) -> &str,
{
    if table.is_empty() {
        return 0.0;
    }
    let matches = table.iter().filter(|r| select(r) == affirmative).count();
    (matches as f64 / table.len() as f64) * 100.0
}

/// One computed summary over a respondent table.
#[derive(Debug, Default, Serialize)]
pub struct SurveySummary {
    pub timestamp: DateTime<Utc>,
    pub respondents: usize,

    pub avg_potential: f64,
    pub avg_interest: f64,

    pub prefers_simulations: usize,
    pub prefers_simulations_pct: f64,
}

impl SurveySummary {
    /// Runs all three aggregates over the table.
    pub fn from_table(table: &[Respondent]) -> Self {
        SurveySummary {
            timestamp: Utc::now(),
            respondents: table.len(),
            avg_potential: compute_average(table, |r| r.potential_score),
            avg_interest: compute_average(table, |r| r.interest_score),
            prefers_simulations: table
                .iter()
                .filter(|r| r.prefers_simulations == AFFIRMATIVE)
                .count(),
            prefers_simulations_pct: compute_affirmative_percentage(
                table,
                |r| &r.prefers_simulations,
                AFFIRMATIVE,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::survey;

    fn respondent(id: u32, potential: u32, interest: u32, prefers: &str) -> Respondent {
        Respondent {
            id,
            potential_score: potential,
            interest_score: interest,
            prefers_simulations: prefers.to_string(),
        }
    }

    #[test]
    fn test_average_of_empty_table_is_zero() {
        assert_eq!(compute_average(&[], |r| r.potential_score), 0.0);
    }

    #[test]
    fn test_average_of_two_scores() {
        let table = vec![respondent(1, 6, 6, "Yes"), respondent(2, 10, 10, "No")];
        assert_eq!(compute_average(&table, |r| r.potential_score), 8.0);
    }

    #[test]
    fn test_average_of_uniform_column_is_exact() {
        let table: Vec<_> = (1..=7).map(|id| respondent(id, 9, 9, "Yes")).collect();
        assert_eq!(compute_average(&table, |r| r.potential_score), 9.0);
        assert_eq!(compute_average(&table, |r| r.interest_score), 9.0);
    }

    #[test]
    fn test_percentage_half_affirmative() {
        let table = vec![
            respondent(1, 8, 8, "Yes"),
            respondent(2, 8, 8, "Yes"),
            respondent(3, 8, 8, "No"),
            respondent(4, 8, 8, "No"),
        ];
        let pct = compute_affirmative_percentage(&table, |r| &r.prefers_simulations, "Yes");
        assert_eq!(pct, 50.0);
    }

    #[test]
    fn test_percentage_extremes_are_exact() {
        let all_yes: Vec<_> = (1..=5).map(|id| respondent(id, 8, 8, "Yes")).collect();
        let all_no: Vec<_> = (1..=5).map(|id| respondent(id, 8, 8, "No")).collect();

        assert_eq!(
            compute_affirmative_percentage(&all_yes, |r| &r.prefers_simulations, "Yes"),
            100.0
        );
        assert_eq!(
            compute_affirmative_percentage(&all_no, |r| &r.prefers_simulations, "Yes"),
            0.0
        );
    }

    #[test]
    fn test_percentage_match_is_case_sensitive() {
        let table = vec![respondent(1, 8, 8, "yes")];
        let pct = compute_affirmative_percentage(&table, |r| &r.prefers_simulations, "Yes");
        assert_eq!(pct, 0.0);
    }

    #[test]
    fn test_percentage_of_empty_table_is_zero() {
        assert_eq!(
            compute_affirmative_percentage(&[], |r| &r.prefers_simulations, "Yes"),
            0.0
        );
    }

    #[test]
    fn test_aggregates_are_order_independent() {
        let mut table = survey();
        let forward = SurveySummary::from_table(&table);
        table.reverse();
        let reversed = SurveySummary::from_table(&table);

        assert_eq!(forward.avg_potential, reversed.avg_potential);
        assert_eq!(forward.avg_interest, reversed.avg_interest);
        assert_eq!(
            forward.prefers_simulations_pct,
            reversed.prefers_simulations_pct
        );
    }

    #[test]
    fn test_summary_of_embedded_dataset() {
        let summary = SurveySummary::from_table(&survey());

        assert_eq!(summary.respondents, 23);
        assert_eq!(summary.avg_potential, 178.0 / 23.0);
        assert_eq!(summary.avg_interest, 172.0 / 23.0);
        assert_eq!(summary.prefers_simulations, 15);
        assert_eq!(summary.prefers_simulations_pct, 15.0 / 23.0 * 100.0);

        // The numbers the original survey write-up quoted
        assert!((summary.avg_potential - 7.7391).abs() < 1e-4);
        assert!((summary.avg_interest - 7.4783).abs() < 1e-4);
        assert!((summary.prefers_simulations_pct - 65.217).abs() < 1e-3);
    }
}
