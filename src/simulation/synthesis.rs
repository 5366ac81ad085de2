use crate::config::{Goal, GeneticFactor, SimulationInput, Supplement};
use crate::dosing::Regimen;
use crate::models::ohs::OhsResult;
use crate::models::{round_to, HpsResult};
use crate::text::{TextValue, TranslatableText};

/// Changes below this are treated as no change.
const PHYSIQUE_DEAD_ZONE_KG: f64 = 0.1;

/// Net body-composition change over the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysiqueOutcome {
    pub muscle_gain_kg: f64,
    pub fat_loss_kg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub summary: TranslatableText,
    pub inferred_goal: Goal,
    pub warnings: Vec<TranslatableText>,
    pub recommendations: Vec<TranslatableText>,
    pub long_term_outlook: TranslatableText,
}

fn physique_descriptor(outcome: &PhysiqueOutcome) -> TranslatableText {
    let gain = TextValue::Number(round_to(outcome.muscle_gain_kg, 1));
    let loss = TextValue::Number(round_to(outcome.fat_loss_kg, 1));
    let gained = outcome.muscle_gain_kg > PHYSIQUE_DEAD_ZONE_KG;
    let lost = outcome.fat_loss_kg > PHYSIQUE_DEAD_ZONE_KG;

    match (gained, lost) {
        (true, true) => TranslatableText::with_values(
            "physique.gain_and_lose",
            [("muscleGain", gain), ("fatLoss", loss)],
        ),
        (true, false) => TranslatableText::with_values("physique.gain", [("muscleGain", gain)]),
        (false, true) => TranslatableText::with_values("physique.lose", [("fatLoss", loss)]),
        (false, false) => TranslatableText::key("physique.maintain"),
    }
}

fn risk_descriptor(highest_risk: u8) -> TranslatableText {
    let key = if highest_risk > 75 {
        "risk.summary.critical"
    } else if highest_risk > 50 {
        "risk.summary.significant"
    } else {
        "risk.summary.manageable"
    };
    TranslatableText::key(key)
}

pub fn generate_summary(outcome: &PhysiqueOutcome, peak: &OhsResult, cycle_weeks: u32) -> TranslatableText {
    TranslatableText::with_values(
        "synthesis.summary",
        [
            ("duration", TextValue::Number(f64::from(cycle_weeks))),
            ("physique", TextValue::Text(physique_descriptor(outcome))),
            ("risk", TextValue::Text(risk_descriptor(peak.risk_scores.highest()))),
        ],
    )
}

pub fn generate_warnings(input: &SimulationInput, peak: &OhsResult, peak_hps: &HpsResult) -> Vec<TranslatableText> {
    let risks = &peak.risk_scores;
    let mut warnings = Vec::new();

    if risks.cardiovascular.score > 50 {
        warnings.push(TranslatableText::key("synthesis.warnings.cardio"));
    }
    if risks.hepatic.score > 50 {
        warnings.push(TranslatableText::key("synthesis.warnings.hepatic"));
    }
    if risks.renal.score > 30 {
        warnings.push(TranslatableText::key("synthesis.warnings.renal"));
    }
    if risks.endocrine.score > 75 {
        warnings.push(TranslatableText::key("synthesis.warnings.endocrine"));
    }
    if peak_hps.total_androgenic > 60.0 && input.profile.has_genetic_factor(GeneticFactor::Alopecia) {
        warnings.push(TranslatableText::key("synthesis.warnings.hair_loss"));
    }

    if warnings.is_empty() {
        warnings.push(TranslatableText::key("synthesis.warnings.general"));
    }

    warnings
}

pub fn generate_recommendations(input: &SimulationInput, peak: &OhsResult) -> Vec<TranslatableText> {
    let risks = &peak.risk_scores;
    let nutrition = &input.nutrition;
    let mut recommendations = Vec::new();

    if risks.cardiovascular.score > 40 {
        let key = if nutrition.has_supplement(Supplement::Omega3) {
            "synthesis.recommendations.cardio"
        } else {
            "synthesis.recommendations.cardio_missing"
        };
        recommendations.push(TranslatableText::key(key));
    }

    if risks.hepatic.score > 40 {
        let supported = nutrition.has_supplement(Supplement::Tudca) || nutrition.has_supplement(Supplement::Nac);
        let key = if supported {
            "synthesis.recommendations.hepatic"
        } else {
            "synthesis.recommendations.hepatic_missing"
        };
        recommendations.push(TranslatableText::key(key));
    }

    let pct_key = if Regimen::from_input(input).has_pct_protocol() {
        "synthesis.recommendations.pct_defined"
    } else {
        "synthesis.recommendations.pct_missing"
    };
    recommendations.push(TranslatableText::key(pct_key));
    recommendations.push(TranslatableText::key("synthesis.recommendations.monitoring"));

    recommendations
}

/// Turns the final physique change and the peak-risk week into descriptors.
pub fn synthesize_results(
    input: &SimulationInput,
    outcome: &PhysiqueOutcome,
    peak: &OhsResult,
    peak_hps: &HpsResult,
) -> SynthesisResult {
    let cycle_weeks = Regimen::from_input(input).cycle_weeks();

    SynthesisResult {
        summary: generate_summary(outcome, peak, cycle_weeks),
        inferred_goal: input.profile.goal,
        warnings: generate_warnings(input, peak, peak_hps),
        recommendations: generate_recommendations(input, peak),
        long_term_outlook: TranslatableText::key("synthesis.long_term_outlook"),
    }
}
