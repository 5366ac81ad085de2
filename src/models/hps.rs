use super::{round_half_up, ConcentrationMap, HpsResult};
use crate::compounds::CompoundLookup;

/// 5% extra expenditure at an anabolic total of 100.
const METABOLIC_SENSITIVITY: f64 = 0.05;

/// Aggregates this week's concentrations into pharmacological scores.
///
/// Totals accumulate unrounded and are rounded once at the end. During the
/// post-cycle phase, compounds that stimulate the HPTA axis offset suppression
/// instead of adding to it; net suppression never drops below zero.
pub fn compute_weekly_hormonal_state(
    concentrations: &ConcentrationMap,
    is_post_cycle: bool,
    compounds: &dyn CompoundLookup,
) -> HpsResult {
    let mut anabolic = 0.0;
    let mut androgenic = 0.0;
    let mut hepatotoxicity = 0.0;
    let mut cardiotoxicity = 0.0;
    let mut nephrotoxicity = 0.0;
    let mut hpta_suppression = 0.0;
    let mut hpta_stimulation = 0.0;
    let mut estrogen_reduction = 0.0;
    let mut blood_pressure_reduction = 0.0;

    for (name, &concentration) in concentrations {
        if concentration <= 0.0 {
            continue;
        }
        let Some(spec) = compounds.get(name) else {
            continue;
        };

        anabolic += spec.anabolic * concentration;
        androgenic += spec.androgenic * concentration;
        hepatotoxicity += spec.hepatotoxicity * concentration;
        cardiotoxicity += spec.cardiotoxicity * concentration;
        nephrotoxicity += spec.nephrotoxicity * concentration;

        match spec.hpta_stimulation {
            Some(stimulation) if is_post_cycle => hpta_stimulation += stimulation * concentration,
            _ => hpta_suppression += spec.hpta_suppression * concentration,
        }

        if let Some(reduction) = spec.estrogen_reduction {
            estrogen_reduction += reduction * concentration;
        }
        if let Some(reduction) = spec.blood_pressure_reduction {
            blood_pressure_reduction += reduction * concentration;
        }
    }

    if is_post_cycle {
        hpta_suppression = (hpta_suppression - hpta_stimulation).max(0.0);
    }

    HpsResult {
        total_anabolic: round_half_up(anabolic),
        total_androgenic: round_half_up(androgenic),
        total_hepatotoxicity: round_half_up(hepatotoxicity),
        total_cardiotoxicity: round_half_up(cardiotoxicity),
        total_hpta_suppression: round_half_up(hpta_suppression),
        total_nephrotoxicity: round_half_up(nephrotoxicity),
        total_estrogen_reduction: estrogen_reduction,
        total_blood_pressure_reduction: blood_pressure_reduction,
        metabolic_adjustment_factor: 1.0 + (anabolic / 100.0) * METABOLIC_SENSITIVITY,
    }
}
