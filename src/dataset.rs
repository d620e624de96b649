//! The embedded survey dataset.
//!
//! Holds the fixed 23-respondent table collected from the simulation
//! feedback form. The table is built once from literals and never mutated.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// The categorical value counted as a positive response.
pub const AFFIRMATIVE: &str = "Yes";

/// The two values the categorical column may take.
pub const CATEGORIES: [&str; 2] = ["Yes", "No"];

/// One surveyed individual's three recorded observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Respondent {
    pub id: u32,
    /// Rating of the tool's potential, 1–10 scale.
    pub potential_score: u32,
    /// Rating of how interesting the tool is, 1–10 scale.
    pub interest_score: u32,
    /// Whether the respondent prefers simulations over traditional material.
    /// Originally recorded as "Ja"/"Nej".
    pub prefers_simulations: String,
}

const POTENTIAL: [u32; 23] = [
    5, 9, 8, 8, 8, 7, 10, 7, 8, 8, 8, 7, 7, 8, 9, 7, 7, 8, 8, 8, 7, 8, 8,
];

const INTEREST: [u32; 23] = [
    5, 10, 7, 7, 9, 7, 10, 8, 5, 4, 8, 8, 8, 9, 9, 8, 6, 8, 8, 7, 7, 7, 7,
];

const PREFERS: [&str; 23] = [
    "No", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "No", "Yes", "No", "Yes",
    "Yes", "Yes", "No", "Yes", "No", "No", "No", "No", "Yes",
];

/// Builds the fixed respondent table. Ids are 1-based and follow the
/// original form submission order.
pub fn survey() -> Vec<Respondent> {
    POTENTIAL
        .iter()
        .zip(INTEREST)
        .zip(PREFERS)
        .enumerate()
        .map(|(i, ((&potential, interest), prefers))| Respondent {
            id: i as u32 + 1,
            potential_score: potential,
            interest_score: interest,
            prefers_simulations: prefers.to_string(),
        })
        .collect()
}

/// Checks that a table is non-empty and every categorical value is one of
/// the known categories. The embedded dataset always passes; this guards
/// future hand-edited tables.
pub fn validate(table: &[Respondent]) -> Result<()> {
    if table.is_empty() {
        bail!("respondent table is empty");
    }

    for r in table {
        if !CATEGORIES.contains(&r.prefers_simulations.as_str()) {
            bail!(
                "respondent {} has unknown categorical value {:?}",
                r.id,
                r.prefers_simulations
            );
        }
    }

    Ok(())
}
