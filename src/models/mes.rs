use super::{BodyComposition, HpsResult, MesResult};
use crate::config::{Goal, NutritionPlan};

impl Goal {
    /// Activity multiplier applied to the basal rate.
    pub fn activity_factor(self) -> f64 {
        match self {
            Goal::AggressiveBulk | Goal::LeanGain | Goal::AggressiveShred => 1.55,
            Goal::Recomposition | Goal::ModerateCut => 1.375,
            Goal::CompetitionPrep => 1.725,
            Goal::AntiAging => 1.2,
            Goal::Unspecified => 1.375,
        }
    }
}

/// Katch-McArdle basal metabolic rate, kcal/day.
pub fn basal_metabolic_rate(lean_body_mass_kg: f64) -> f64 {
    370.0 + 21.6 * lean_body_mass_kg
}

/// Daily energy expenditure and calorie balance for the current body.
pub fn compute_weekly_energetics(
    body: &BodyComposition,
    goal: Goal,
    nutrition: &NutritionPlan,
    hps: &HpsResult,
) -> MesResult {
    let lean_body_mass_kg = body.weight_kg() * (1.0 - body.body_fat_pct() / 100.0);
    let bmr = basal_metabolic_rate(lean_body_mass_kg);
    let tdee = bmr * goal.activity_factor() * hps.metabolic_adjustment_factor;

    MesResult {
        tdee,
        calorie_balance: nutrition.calories - tdee,
    }
}
