//! Weekly sub-models, run in order PKE -> HPS -> MES -> AMS -> OHS.
//!
//! Every function here is pure: it reads its inputs and returns a fresh value.
//! State is threaded across weeks by the driver in [`crate::simulation`].

pub mod pke;
pub mod hps;
pub mod mes;
pub mod ams;
pub mod ohs;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use pke::compute_weekly_concentrations;
pub use hps::compute_weekly_hormonal_state;
pub use mes::compute_weekly_energetics;
pub use ams::compute_weekly_body_composition_change;
pub use ohs::{baseline_blood_markers, calculate_risk, compute_weekly_health_state};

/// Compound name -> unitless active concentration score.
///
/// Ordered so that floating-point accumulation runs in the same order every run.
pub type ConcentrationMap = BTreeMap<String, f64>;

/// Aggregate pharmacological scores for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpsResult {
    pub total_anabolic: f64,
    pub total_androgenic: f64,
    pub total_hepatotoxicity: f64,
    pub total_cardiotoxicity: f64,
    pub total_hpta_suppression: f64,
    pub total_nephrotoxicity: f64,
    pub total_estrogen_reduction: f64,
    pub total_blood_pressure_reduction: f64,
    /// Multiplier on energy expenditure, 1.0 when neutral.
    pub metabolic_adjustment_factor: f64,
}

impl Default for HpsResult {
    fn default() -> Self {
        Self {
            total_anabolic: 0.0,
            total_androgenic: 0.0,
            total_hepatotoxicity: 0.0,
            total_cardiotoxicity: 0.0,
            total_hpta_suppression: 0.0,
            total_nephrotoxicity: 0.0,
            total_estrogen_reduction: 0.0,
            total_blood_pressure_reduction: 0.0,
            metabolic_adjustment_factor: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MesResult {
    /// Total daily energy expenditure, kcal.
    pub tdee: f64,
    /// Planned intake minus expenditure, kcal/day.
    pub calorie_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmsWeeklyResult {
    pub muscle_change_kg: f64,
    pub fat_change_kg: f64,
}

/// Running muscle and fat totals owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    pub muscle_mass_kg: f64,
    pub fat_mass_kg: f64,
}

impl BodyComposition {
    pub fn from_weight(weight_kg: f64, body_fat_pct: f64) -> Self {
        Self {
            muscle_mass_kg: weight_kg * (1.0 - body_fat_pct / 100.0),
            fat_mass_kg: weight_kg * (body_fat_pct / 100.0),
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.muscle_mass_kg + self.fat_mass_kg
    }

    /// Body-fat percentage, 0 when the total weight has collapsed to nothing.
    pub fn body_fat_pct(&self) -> f64 {
        let weight = self.weight_kg();
        if weight <= 0.0 {
            0.0
        } else {
            self.fat_mass_kg / weight * 100.0
        }
    }

    pub fn apply(&mut self, change: &AmsWeeklyResult) {
        self.muscle_mass_kg += change.muscle_change_kg;
        self.fat_mass_kg += change.fat_change_kg;
    }
}

/// Nearest integer with halves rounded towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to a fixed number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
