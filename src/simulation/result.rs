use crate::config::{Goal, SimulationInput};
use crate::dosing::Regimen;
use crate::models::ohs::{BloodPanel, RiskScoreSet};
use crate::text::TranslatableText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiqueDataPoint {
    pub week: u32,
    pub muscle_mass_kg: f64,
    pub fat_mass_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodMarkerWeek {
    pub week: u32,
    pub markers: BloodPanel,
}

/// Everything one run produces. Index 0 of both time series is the baseline,
/// index N the state after N weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub id: String,
    pub summary: TranslatableText,
    pub inferred_goal: Goal,
    pub physique_projection: Vec<PhysiqueDataPoint>,
    pub blood_marker_history: Vec<BloodMarkerWeek>,
    /// Scores from the peak-risk week.
    pub risk_scores: RiskScoreSet,
    pub warnings: Vec<TranslatableText>,
    pub recommendations: Vec<TranslatableText>,
    pub long_term_outlook: TranslatableText,
    #[serde(flatten)]
    pub input: SimulationInput,
    #[serde(default)]
    pub ai_analysis: Option<TranslatableText>,
}

impl SimulationResult {
    /// Weeks the input bundle calls for: phases plus the longest post-cycle entry.
    pub fn expected_weeks(&self) -> u32 {
        Regimen::from_input(&self.input).total_weeks()
    }

    pub fn muscle_gain_kg(&self) -> f64 {
        match (self.physique_projection.first(), self.physique_projection.last()) {
            (Some(first), Some(last)) => last.muscle_mass_kg - first.muscle_mass_kg,
            _ => 0.0,
        }
    }

    pub fn fat_loss_kg(&self) -> f64 {
        match (self.physique_projection.first(), self.physique_projection.last()) {
            (Some(first), Some(last)) => first.fat_mass_kg - last.fat_mass_kg,
            _ => 0.0,
        }
    }

    /// Stores narrative text produced outside the engine.
    pub fn attach_analysis(&mut self, analysis: TranslatableText) {
        self.ai_analysis = Some(analysis);
    }
}
