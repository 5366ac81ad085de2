use super::result::SimulationResult;
use crate::models::ohs::MarkerKind;
use serde::{Deserialize, Serialize};

/// Side-by-side summary of independent runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub n_simulations: usize,
    pub entries: Vec<ComparisonEntry>,
    pub physique: PhysiqueSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub id: String,
    pub total_weeks: u32,
    pub muscle_gain_kg: f64,
    pub fat_loss_kg: f64,
    pub cardiovascular_risk: u8,
    pub hepatic_risk: u8,
    pub renal_risk: u8,
    pub endocrine_risk: u8,
    pub final_hematocrit: Option<f64>,
    pub final_egfr: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhysiqueSummary {
    pub muscle_gain_mean: f64,
    pub muscle_gain_sd: f64,
    pub fat_loss_mean: f64,
    pub fat_loss_sd: f64,
}

impl ComparisonEntry {
    fn from_result(result: &SimulationResult) -> Self {
        let final_panel = result.blood_marker_history.last().map(|week| &week.markers);
        let final_value = |kind| final_panel.and_then(|panel| panel.get(kind)).map(|m| m.value);
        let risks = &result.risk_scores;

        Self {
            id: result.id.clone(),
            total_weeks: result.expected_weeks(),
            muscle_gain_kg: result.muscle_gain_kg(),
            fat_loss_kg: result.fat_loss_kg(),
            cardiovascular_risk: risks.cardiovascular.score,
            hepatic_risk: risks.hepatic.score,
            renal_risk: risks.renal.score,
            endocrine_risk: risks.endocrine.score,
            final_hematocrit: final_value(MarkerKind::Hematocrit),
            final_egfr: final_value(MarkerKind::Egfr),
        }
    }
}

impl ComparisonSummary {
    pub fn from_results(results: &[SimulationResult]) -> Self {
        let entries: Vec<ComparisonEntry> = results.iter().map(ComparisonEntry::from_result).collect();

        let gains: Vec<f64> = entries.iter().map(|e| e.muscle_gain_kg).collect();
        let losses: Vec<f64> = entries.iter().map(|e| e.fat_loss_kg).collect();

        Self {
            n_simulations: results.len(),
            physique: PhysiqueSummary {
                muscle_gain_mean: mean(&gains),
                muscle_gain_sd: std_dev(&gains),
                fat_loss_mean: mean(&losses),
                fat_loss_sd: std_dev(&losses),
            },
            entries,
        }
    }

    /// Run with the lowest peak cardiovascular score; ties keep the earlier run.
    pub fn lowest_cardiovascular_risk(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().reduce(|best, entry| {
            if entry.cardiovascular_risk < best.cardiovascular_risk {
                entry
            } else {
                best
            }
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        0.0
    } else {
        let mean_val = mean(values);
        let variance = values.iter()
            .map(|v| (v - mean_val).powi(2))
            .sum::<f64>() / (values.len() - 1) as f64;
        variance.sqrt()
    }
}
