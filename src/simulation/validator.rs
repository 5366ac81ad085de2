use super::result::SimulationResult;
use serde::{Deserialize, Serialize};

/// Identifiers produced by this crate start with this.
pub const SIMULATION_ID_PREFIX: &str = "sim-";

const MUSCLE_GAIN_SUGGESTION_KG: f64 = 12.0;
const LOW_FAT_MASS_KG: f64 = 3.0;

/// Advisory report: errors undermine trust in the result, warnings flag
/// implausible output, suggestions are informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Checks a result's bookkeeping and physiological plausibility.
pub fn validate_simulation(sim: &SimulationResult) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    let expected_len = sim.expected_weeks() as usize + 1;

    if sim.physique_projection.len() != expected_len {
        errors.push(format!(
            "Physique projection length ({}) does not match expected total weeks + 1 ({}).",
            sim.physique_projection.len(),
            expected_len
        ));
    }
    if sim.blood_marker_history.len() != expected_len {
        errors.push(format!(
            "Blood marker history length ({}) does not match expected total weeks + 1 ({}).",
            sim.blood_marker_history.len(),
            expected_len
        ));
    }

    if let (Some(first), Some(last)) = (sim.physique_projection.first(), sim.physique_projection.last()) {
        let gain = last.muscle_mass_kg - first.muscle_mass_kg;
        if gain > MUSCLE_GAIN_SUGGESTION_KG {
            suggestions.push(format!(
                "Muscle gain ({:.1} kg) may exceed typical natural limits.",
                gain
            ));
        }

        if last.fat_mass_kg < LOW_FAT_MASS_KG && first.fat_mass_kg >= LOW_FAT_MASS_KG {
            warnings.push(format!(
                "Final fat mass is very low ({:.1} kg), which may be unrealistic or unsustainable.",
                last.fat_mass_kg
            ));
        }
    }

    if !sim.id.starts_with(SIMULATION_ID_PREFIX) {
        warnings.push(format!(
            "Simulation ID format invalid. Should be prefixed with \"{}\".",
            SIMULATION_ID_PREFIX
        ));
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
    }
}
