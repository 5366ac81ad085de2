pub mod result;
pub mod synthesis;
pub mod validator;
pub mod comparison;

use crate::compounds::CompoundLookup;
use crate::config::SimulationInput;
use crate::dosing::Regimen;
use crate::models::ohs::OhsResult;
use crate::models::{
    baseline_blood_markers, compute_weekly_body_composition_change, compute_weekly_concentrations,
    compute_weekly_energetics, compute_weekly_hormonal_state, compute_weekly_health_state,
    round_to, BodyComposition, ConcentrationMap, HpsResult,
};
use log::{debug, info};
use rayon::prelude::*;

pub use comparison::*;
pub use result::*;
pub use synthesis::*;
pub use validator::*;

/// Builds an identifier of the form `sim-<unix millis>-<seq>`.
pub fn generate_simulation_id(seq: usize) -> String {
    format!(
        "{}{}-{}",
        SIMULATION_ID_PREFIX,
        chrono::Utc::now().timestamp_millis(),
        seq
    )
}

/// Peak-risk snapshot: OHS and HPS output of the week with the highest
/// cardiovascular score.
struct PeakRisk {
    ohs: OhsResult,
    hps: HpsResult,
}

/// Drives the weekly PKE -> HPS -> MES -> AMS -> OHS pipeline.
pub struct Simulator<'a> {
    compounds: &'a dyn CompoundLookup,
}

impl<'a> Simulator<'a> {
    pub fn new(compounds: &'a dyn CompoundLookup) -> Self {
        Self { compounds }
    }

    /// Runs one simulation under a freshly generated identifier.
    pub fn run(&self, input: &SimulationInput) -> SimulationResult {
        self.run_with_id(input, generate_simulation_id(0))
    }

    /// Runs independent simulations in parallel, one per bundle, in input order.
    pub fn run_all(&self, inputs: &[SimulationInput]) -> Vec<SimulationResult> {
        inputs
            .par_iter()
            .enumerate()
            .map(|(seq, input)| self.run_with_id(input, generate_simulation_id(seq)))
            .collect()
    }

    /// Runs one simulation. Identical inputs produce identical time series.
    pub fn run_with_id(&self, input: &SimulationInput, id: String) -> SimulationResult {
        let profile = &input.profile;
        let regimen = Regimen::from_input(input);
        let cycle_weeks = regimen.cycle_weeks();
        let total_weeks = regimen.total_weeks();

        info!("Starting simulation {} over {} weeks ({} on cycle)", id, total_weeks, cycle_weeks);

        let initial_body = BodyComposition::from_weight(profile.weight, profile.body_fat_pct);
        let mut body = initial_body;

        let baseline_markers = baseline_blood_markers(profile.baseline_blood_work.as_ref());
        let baseline_hps = HpsResult::default();
        let mut peak = PeakRisk {
            ohs: compute_weekly_health_state(profile, &baseline_hps, &baseline_markers),
            hps: baseline_hps,
        };

        let mut physique_projection = Vec::with_capacity(total_weeks as usize + 1);
        physique_projection.push(physique_point(0, &body));

        let mut blood_marker_history = Vec::with_capacity(total_weeks as usize + 1);
        blood_marker_history.push(BloodMarkerWeek {
            week: 0,
            markers: baseline_markers.clone(),
        });

        let mut markers = baseline_markers;

        let mut concentrations = ConcentrationMap::new();

        for week in 1..=total_weeks {
            concentrations = compute_weekly_concentrations(week, &regimen, &concentrations, self.compounds);

            let hps = compute_weekly_hormonal_state(&concentrations, regimen.is_post_cycle(week), self.compounds);
            let mes = compute_weekly_energetics(&body, profile.goal, &input.nutrition, &hps);
            let change = compute_weekly_body_composition_change(&mes, &hps);
            body.apply(&change);
            physique_projection.push(physique_point(week, &body));

            let ohs = compute_weekly_health_state(profile, &hps, &markers);
            markers = ohs.blood_markers.clone();

            debug!(
                "Week {}: {} active compounds, balance {:.0} kcal/day, cardiovascular risk {}",
                week,
                concentrations.len(),
                mes.calorie_balance,
                ohs.risk_scores.cardiovascular.score
            );

            blood_marker_history.push(BloodMarkerWeek {
                week,
                markers: markers.clone(),
            });

            if ohs.risk_scores.cardiovascular.score > peak.ohs.risk_scores.cardiovascular.score {
                debug!("Week {} is the new peak-risk week", week);
                peak = PeakRisk { ohs, hps };
            }
        }

        let outcome = PhysiqueOutcome {
            muscle_gain_kg: body.muscle_mass_kg - initial_body.muscle_mass_kg,
            fat_loss_kg: initial_body.fat_mass_kg - body.fat_mass_kg,
        };
        let synthesis = synthesize_results(input, &outcome, &peak.ohs, &peak.hps);

        info!(
            "Simulation {} finished: {:+.1} kg muscle, {:+.1} kg fat",
            id, outcome.muscle_gain_kg, -outcome.fat_loss_kg
        );

        SimulationResult {
            id,
            summary: synthesis.summary,
            inferred_goal: synthesis.inferred_goal,
            physique_projection,
            blood_marker_history,
            risk_scores: peak.ohs.risk_scores,
            warnings: synthesis.warnings,
            recommendations: synthesis.recommendations,
            long_term_outlook: synthesis.long_term_outlook,
            input: input.clone(),
            ai_analysis: None,
        }
    }
}

fn physique_point(week: u32, body: &BodyComposition) -> PhysiqueDataPoint {
    PhysiqueDataPoint {
        week,
        muscle_mass_kg: round_to(body.muscle_mass_kg, 2),
        fat_mass_kg: round_to(body.fat_mass_kg, 2),
    }
}
