//! Organ & health sub-model.
//!
//! Blood markers evolve as a first-order Markov chain: each week's panel is
//! computed only from the previous panel and the week's HPS scores. Values are
//! stored at display precision, and that stored value is what the next week reads.

use super::{round_half_up, round_to, HpsResult};
use crate::config::{AthleteProfile, BloodWork, GeneticFactor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Liver enzymes never fall below this.
pub const LIVER_ENZYME_FLOOR: f64 = 25.0;
/// Hepatotoxicity above this makes liver enzymes grow instead of regenerate.
pub const HEPATIC_STRAIN_THRESHOLD: f64 = 5.0;
const LIVER_STRAIN_GROWTH: f64 = 1.05;
const LIVER_REGENERATION: f64 = 0.85;
const EGFR_FLOOR: f64 = 15.0;
const EGFR_RECOVERY: f64 = 0.5;
const TESTOSTERONE_FLOOR: f64 = 50.0;
const ESTROGEN_REDUCTION_CAP: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    SystolicBp,
    DiastolicBp,
    Hdl,
    Ldl,
    Glucose,
    TotalTestosterone,
    Estradiol,
    LhFsh,
    Alt,
    Ast,
    Egfr,
    Hematocrit,
}

impl MarkerKind {
    /// Panel order: cardiovascular, metabolic, hormonal, liver, kidney, blood count.
    pub const ALL: [MarkerKind; 12] = [
        MarkerKind::SystolicBp,
        MarkerKind::DiastolicBp,
        MarkerKind::Hdl,
        MarkerKind::Ldl,
        MarkerKind::Glucose,
        MarkerKind::TotalTestosterone,
        MarkerKind::Estradiol,
        MarkerKind::LhFsh,
        MarkerKind::Alt,
        MarkerKind::Ast,
        MarkerKind::Egfr,
        MarkerKind::Hematocrit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::SystolicBp => "Systolic BP",
            MarkerKind::DiastolicBp => "Diastolic BP",
            MarkerKind::Hdl => "HDL-C",
            MarkerKind::Ldl => "LDL-C",
            MarkerKind::Glucose => "Glucose",
            MarkerKind::TotalTestosterone => "Total Testosterone",
            MarkerKind::Estradiol => "Estradiol (E2)",
            MarkerKind::LhFsh => "LH / FSH",
            MarkerKind::Alt => "ALT",
            MarkerKind::Ast => "AST",
            MarkerKind::Egfr => "eGFR",
            MarkerKind::Hematocrit => "Hematocrit",
        }
    }

    /// Healthy default used when no baseline value is supplied.
    pub fn default_value(self) -> f64 {
        match self {
            MarkerKind::SystolicBp => 120.0,
            MarkerKind::DiastolicBp => 80.0,
            MarkerKind::Hdl => 50.0,
            MarkerKind::Ldl => 100.0,
            MarkerKind::Glucose => 85.0,
            MarkerKind::TotalTestosterone => 500.0,
            MarkerKind::Estradiol => 25.0,
            MarkerKind::LhFsh => 5.0,
            MarkerKind::Alt | MarkerKind::Ast => 25.0,
            MarkerKind::Egfr => 100.0,
            MarkerKind::Hematocrit => 42.0,
        }
    }

    /// Decimals kept when a weekly value is stored.
    pub fn precision(self) -> i32 {
        match self {
            MarkerKind::LhFsh | MarkerKind::Hematocrit => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStatus {
    Normal,
    Elevated,
    Low,
    Critical,
}

impl fmt::Display for MarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarkerStatus::Normal => "normal",
            MarkerStatus::Elevated => "elevated",
            MarkerStatus::Low => "low",
            MarkerStatus::Critical => "critical",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodMarker {
    pub marker: MarkerKind,
    pub value: f64,
    pub status: MarkerStatus,
    pub notes: String,
}

impl BloodMarker {
    fn new(marker: MarkerKind, value: f64, status: MarkerStatus, notes: impl Into<String>) -> Self {
        Self {
            marker,
            value: round_to(value, marker.precision()),
            status,
            notes: notes.into(),
        }
    }
}

/// Ordered list of markers for one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BloodPanel {
    pub markers: Vec<BloodMarker>,
}

impl BloodPanel {
    pub fn get(&self, kind: MarkerKind) -> Option<&BloodMarker> {
        self.markers.iter().find(|m| m.marker == kind)
    }

    /// Stored value, or the marker's default when the panel lacks it.
    pub fn value(&self, kind: MarkerKind) -> f64 {
        self.get(kind).map_or_else(|| kind.default_value(), |m| m.value)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// 0..=100
    pub score: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreSet {
    pub cardiovascular: RiskScore,
    pub hepatic: RiskScore,
    pub renal: RiskScore,
    pub endocrine: RiskScore,
}

impl RiskScoreSet {
    pub fn highest(&self) -> u8 {
        self.cardiovascular
            .score
            .max(self.hepatic.score)
            .max(self.renal.score)
            .max(self.endocrine.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhsResult {
    pub blood_markers: BloodPanel,
    pub risk_scores: RiskScoreSet,
}

/// Week-0 panel from user bloodwork, falling back to defaults. Estradiol,
/// LH/FSH and hematocrit always start at their defaults.
pub fn baseline_blood_markers(baseline: Option<&BloodWork>) -> BloodPanel {
    let supplied = |kind: MarkerKind| -> Option<f64> {
        let work = baseline?;
        match kind {
            MarkerKind::SystolicBp => work.systolic_bp,
            MarkerKind::DiastolicBp => work.diastolic_bp,
            MarkerKind::Hdl => work.hdl,
            MarkerKind::Ldl => work.ldl,
            MarkerKind::Glucose => work.glucose,
            MarkerKind::TotalTestosterone => work.total_testosterone,
            MarkerKind::Alt => work.alt,
            MarkerKind::Ast => work.ast,
            MarkerKind::Egfr => work.egfr,
            MarkerKind::Estradiol | MarkerKind::LhFsh | MarkerKind::Hematocrit => None,
        }
    };

    let markers = MarkerKind::ALL
        .iter()
        .map(|&kind| BloodMarker {
            marker: kind,
            value: supplied(kind).unwrap_or_else(|| kind.default_value()),
            status: MarkerStatus::Normal,
            notes: "Baseline value.".to_string(),
        })
        .collect();

    BloodPanel { markers }
}

/// Age adds half a point per year past 35, then a genetic flag multiplies by 1.3.
/// The order matters and is kept as is.
pub fn calculate_risk(base_score: f64, age: u32, genetic_risk: bool, notes: impl Into<String>) -> RiskScore {
    let mut score = base_score;
    if age > 35 {
        score += f64::from(age - 35) * 0.5;
    }
    if genetic_risk {
        score = (score * 1.3).min(100.0);
    }

    RiskScore {
        score: round_half_up(score).clamp(0.0, 100.0) as u8,
        notes: notes.into(),
    }
}

fn status_above(value: f64, threshold: f64) -> MarkerStatus {
    if value > threshold {
        MarkerStatus::Elevated
    } else {
        MarkerStatus::Normal
    }
}

fn status_below(value: f64, threshold: f64) -> MarkerStatus {
    if value < threshold {
        MarkerStatus::Low
    } else {
        MarkerStatus::Normal
    }
}

fn next_liver_enzyme(previous: f64, hepatotoxicity: f64, increment_per_point: f64) -> f64 {
    let carry = if hepatotoxicity > HEPATIC_STRAIN_THRESHOLD {
        LIVER_STRAIN_GROWTH
    } else {
        LIVER_REGENERATION
    };
    (previous * carry + hepatotoxicity * increment_per_point).max(LIVER_ENZYME_FLOOR)
}

fn next_blood_markers(profile: &AthleteProfile, hps: &HpsResult, previous: &BloodPanel) -> BloodPanel {
    let prev = |kind: MarkerKind| previous.value(kind);
    let poor_lipids = profile.has_genetic_factor(GeneticFactor::LipidResponse);
    let aromatizer = profile.has_genetic_factor(GeneticFactor::Aromatization);

    // Cardiovascular
    let systolic = prev(MarkerKind::SystolicBp) + hps.total_cardiotoxicity * 0.4
        - hps.total_blood_pressure_reduction * 0.5;
    let diastolic = prev(MarkerKind::DiastolicBp) + hps.total_cardiotoxicity * 0.2
        - hps.total_blood_pressure_reduction * 0.25;

    let mut hdl = prev(MarkerKind::Hdl) - hps.total_cardiotoxicity * 0.2;
    let mut ldl = prev(MarkerKind::Ldl) + hps.total_cardiotoxicity * 0.3;
    if poor_lipids {
        hdl -= hps.total_cardiotoxicity * 0.1;
        ldl += hps.total_cardiotoxicity * 0.15;
    }

    // Metabolic
    let glucose = prev(MarkerKind::Glucose) + (hps.metabolic_adjustment_factor - 1.0);

    // Hormonal
    let endogenous = (prev(MarkerKind::TotalTestosterone) - hps.total_hpta_suppression * 20.0)
        .max(TESTOSTERONE_FLOOR);
    let testosterone = endogenous + hps.total_anabolic * 25.0;

    let mut estradiol = prev(MarkerKind::Estradiol) + hps.total_androgenic * 0.3;
    if aromatizer {
        estradiol *= 1.05;
    }
    // Inhibitors act at a tenth of their nominal strength per week.
    estradiol *= 1.0 - hps.total_estrogen_reduction.min(ESTROGEN_REDUCTION_CAP) * 0.1;

    let lh_fsh = (5.0 - hps.total_hpta_suppression * 0.5).max(0.1);

    // Liver
    let alt = next_liver_enzyme(prev(MarkerKind::Alt), hps.total_hepatotoxicity, 0.5);
    let ast = next_liver_enzyme(prev(MarkerKind::Ast), hps.total_hepatotoxicity, 0.4);

    // Kidney
    let renal_strain = hps.total_nephrotoxicity * 0.2 + hps.total_cardiotoxicity * 0.1;
    let recovery = if renal_strain == 0.0 { EGFR_RECOVERY } else { 0.0 };
    let egfr = (prev(MarkerKind::Egfr) - renal_strain + recovery).max(EGFR_FLOOR);

    // No ceiling on hematocrit.
    let hematocrit = prev(MarkerKind::Hematocrit) + hps.total_androgenic * 0.08;

    let lh_status = if hps.total_hpta_suppression > 5.0 {
        MarkerStatus::Critical
    } else {
        MarkerStatus::Normal
    };

    let markers = vec![
        BloodMarker::new(
            MarkerKind::SystolicBp,
            systolic,
            status_above(systolic, 130.0),
            "Influenced by cardio-toxicity and support drugs.",
        ),
        BloodMarker::new(
            MarkerKind::DiastolicBp,
            diastolic,
            status_above(diastolic, 85.0),
            "Influenced by cardio-toxicity and support drugs.",
        ),
        BloodMarker::new(MarkerKind::Hdl, hdl, status_below(hdl, 40.0), "Suppressed by cardio-toxicity."),
        BloodMarker::new(MarkerKind::Ldl, ldl, status_above(ldl, 130.0), "Elevated by cardio-toxicity."),
        BloodMarker::new(
            MarkerKind::Glucose,
            glucose,
            status_above(glucose, 100.0),
            "Influenced by hormonal metabolic shift.",
        ),
        BloodMarker::new(
            MarkerKind::TotalTestosterone,
            testosterone,
            status_above(testosterone, 900.0),
            "Exogenous sources elevate levels.",
        ),
        BloodMarker::new(
            MarkerKind::Estradiol,
            estradiol,
            status_above(estradiol, 45.0),
            "Aromatization from androgens.",
        ),
        BloodMarker::new(MarkerKind::LhFsh, lh_fsh, lh_status, "Reflects HPTA suppression."),
        BloodMarker::new(
            MarkerKind::Alt,
            alt,
            status_above(alt, 50.0),
            format!("Strain from hepato-toxicity score of {}.", hps.total_hepatotoxicity),
        ),
        BloodMarker::new(
            MarkerKind::Ast,
            ast,
            status_above(ast, 50.0),
            "Strain from hepato-toxicity and muscle breakdown.",
        ),
        BloodMarker::new(
            MarkerKind::Egfr,
            egfr,
            status_below(egfr, 60.0),
            format!("Filtration rate affected by renal strain score of {:.1}.", renal_strain),
        ),
        BloodMarker::new(
            MarkerKind::Hematocrit,
            hematocrit,
            status_above(hematocrit, 50.0),
            "Increased by androgenic load.",
        ),
    ];

    BloodPanel { markers }
}

/// Next week's blood panel and this week's risk scores.
pub fn compute_weekly_health_state(
    profile: &AthleteProfile,
    hps: &HpsResult,
    previous: &BloodPanel,
) -> OhsResult {
    let blood_markers = next_blood_markers(profile, hps, previous);
    let age = profile.age;

    let risk_scores = RiskScoreSet {
        cardiovascular: calculate_risk(
            hps.total_cardiotoxicity,
            age,
            profile.has_genetic_factor(GeneticFactor::CardioRisk),
            "Based on lipid impact, androgen load, and genetics.",
        ),
        hepatic: calculate_risk(
            hps.total_hepatotoxicity,
            age,
            false,
            format!(
                "Based on direct toxicity of oral compounds. ALT: {}",
                blood_markers.value(MarkerKind::Alt)
            ),
        ),
        renal: calculate_risk(
            hps.total_nephrotoxicity,
            age,
            false,
            format!(
                "Based on direct nephrotoxicity and BP strain. eGFR: {}",
                blood_markers.value(MarkerKind::Egfr)
            ),
        ),
        endocrine: calculate_risk(
            hps.total_hpta_suppression,
            age,
            false,
            "Based on severity of HPTA shutdown.",
        ),
    };

    OhsResult {
        blood_markers,
        risk_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hps() -> HpsResult {
        HpsResult::default()
    }

    #[test]
    fn test_baseline_uses_supplied_values() {
        let work = BloodWork {
            systolic_bp: Some(128.0),
            egfr: Some(92.0),
            ..BloodWork::default()
        };
        let panel = baseline_blood_markers(Some(&work));

        assert_eq!(panel.len(), MarkerKind::ALL.len());
        assert_eq!(panel.value(MarkerKind::SystolicBp), 128.0);
        assert_eq!(panel.value(MarkerKind::Egfr), 92.0);
        assert_eq!(panel.value(MarkerKind::Hdl), 50.0);
        assert_eq!(panel.value(MarkerKind::Estradiol), 25.0);
        assert!(panel.markers.iter().all(|m| m.status == MarkerStatus::Normal));
    }

    #[test]
    fn test_liver_regenerates_to_floor_under_low_toxicity() {
        let profile = AthleteProfile::default();
        let mut panel = baseline_blood_markers(None);
        let load = HpsResult {
            total_hepatotoxicity: 2.0,
            ..hps()
        };

        for _ in 0..12 {
            panel = compute_weekly_health_state(&profile, &load, &panel).blood_markers;
        }
        assert_eq!(panel.value(MarkerKind::Alt), 25.0);
        assert_eq!(panel.value(MarkerKind::Ast), 25.0);
    }

    #[test]
    fn test_liver_strain_accumulates() {
        let profile = AthleteProfile::default();
        let panel = baseline_blood_markers(None);
        let load = HpsResult {
            total_hepatotoxicity: 9.0,
            ..hps()
        };

        let week_1 = compute_weekly_health_state(&profile, &load, &panel).blood_markers;
        // 25 * 1.05 + 9 * 0.5 = 30.75
        assert_eq!(week_1.value(MarkerKind::Alt), 31.0);
        let week_2 = compute_weekly_health_state(&profile, &load, &week_1).blood_markers;
        assert!(week_2.value(MarkerKind::Alt) > week_1.value(MarkerKind::Alt));
    }

    #[test]
    fn test_egfr_recovers_only_without_strain() {
        let profile = AthleteProfile::default();
        let work = BloodWork {
            egfr: Some(90.0),
            ..BloodWork::default()
        };
        let panel = baseline_blood_markers(Some(&work));

        let rested = compute_weekly_health_state(&profile, &hps(), &panel).blood_markers;
        // 90.5 stored at whole-number precision
        assert_eq!(rested.value(MarkerKind::Egfr), 91.0);

        let strained = HpsResult {
            total_nephrotoxicity: 10.0,
            total_cardiotoxicity: 10.0,
            ..hps()
        };
        let next = compute_weekly_health_state(&profile, &strained, &panel).blood_markers;
        assert_eq!(next.value(MarkerKind::Egfr), 87.0);
    }

    #[test]
    fn test_egfr_floor() {
        let profile = AthleteProfile::default();
        let work = BloodWork {
            egfr: Some(16.0),
            ..BloodWork::default()
        };
        let strained = HpsResult {
            total_nephrotoxicity: 50.0,
            ..hps()
        };
        let next = compute_weekly_health_state(&profile, &strained, &baseline_blood_markers(Some(&work)));
        assert_eq!(next.blood_markers.value(MarkerKind::Egfr), 15.0);
        assert_eq!(next.blood_markers.get(MarkerKind::Egfr).unwrap().status, MarkerStatus::Low);
    }

    #[test]
    fn test_blood_pressure_and_lipids() {
        let mut profile = AthleteProfile::default();
        let panel = baseline_blood_markers(None);
        let load = HpsResult {
            total_cardiotoxicity: 10.0,
            total_blood_pressure_reduction: 2.0,
            ..hps()
        };

        let plain = compute_weekly_health_state(&profile, &load, &panel).blood_markers;
        assert_eq!(plain.value(MarkerKind::SystolicBp), 123.0);
        assert_eq!(plain.value(MarkerKind::DiastolicBp), 82.0);
        assert_eq!(plain.value(MarkerKind::Hdl), 48.0);
        assert_eq!(plain.value(MarkerKind::Ldl), 103.0);

        profile.genetic_factors.push(GeneticFactor::LipidResponse);
        let poor = compute_weekly_health_state(&profile, &load, &panel).blood_markers;
        assert_eq!(poor.value(MarkerKind::Hdl), 47.0);
        assert_eq!(poor.value(MarkerKind::Ldl), 105.0);
    }

    #[test]
    fn test_hormones() {
        let profile = AthleteProfile::default();
        let panel = baseline_blood_markers(None);
        let load = HpsResult {
            total_anabolic: 16.0,
            total_androgenic: 16.0,
            total_hpta_suppression: 18.0,
            total_estrogen_reduction: 0.5,
            ..hps()
        };

        let next = compute_weekly_health_state(&profile, &load, &panel).blood_markers;
        // max(50, 500 - 360) + 400
        assert_eq!(next.value(MarkerKind::TotalTestosterone), 540.0);
        // (25 + 4.8) * (1 - 0.05) = 28.31
        assert_eq!(next.value(MarkerKind::Estradiol), 28.0);
        assert_relative_eq!(next.value(MarkerKind::LhFsh), 0.1);
        assert_eq!(next.get(MarkerKind::LhFsh).unwrap().status, MarkerStatus::Critical);
        // 42 + 1.28
        assert_relative_eq!(next.value(MarkerKind::Hematocrit), 43.3);
    }

    #[test]
    fn test_testosterone_floor_before_exogenous_contribution() {
        let profile = AthleteProfile::default();
        let load = HpsResult {
            total_hpta_suppression: 100.0,
            ..hps()
        };
        let next = compute_weekly_health_state(&profile, &load, &baseline_blood_markers(None));
        assert_eq!(next.blood_markers.value(MarkerKind::TotalTestosterone), 50.0);
    }

    fn panel_with(kind: MarkerKind, value: f64) -> BloodPanel {
        let mut panel = baseline_blood_markers(None);
        for marker in panel.markers.iter_mut().filter(|m| m.marker == kind) {
            marker.value = value;
        }
        panel
    }

    fn status_of(panel: &BloodPanel, kind: MarkerKind) -> MarkerStatus {
        panel.get(kind).unwrap().status
    }

    #[test]
    fn test_liver_enzymes_flag_elevated_above_fifty() {
        let profile = AthleteProfile::default();
        let load = HpsResult {
            total_hepatotoxicity: 9.0,
            ..hps()
        };

        let mut weeks = vec![baseline_blood_markers(None)];
        for _ in 0..5 {
            let next = compute_weekly_health_state(&profile, &load, weeks.last().unwrap()).blood_markers;
            weeks.push(next);
        }

        // 43 * 1.05 + 4.5 = 49.65
        assert_eq!(weeks[4].value(MarkerKind::Alt), 50.0);
        assert_eq!(status_of(&weeks[4], MarkerKind::Alt), MarkerStatus::Normal);
        assert_eq!(status_of(&weeks[4], MarkerKind::Ast), MarkerStatus::Normal);

        // 50 * 1.05 + 4.5 = 57, 46 * 1.05 + 3.6 = 51.9
        assert_eq!(weeks[5].value(MarkerKind::Alt), 57.0);
        assert_eq!(weeks[5].value(MarkerKind::Ast), 52.0);
        assert_eq!(status_of(&weeks[5], MarkerKind::Alt), MarkerStatus::Elevated);
        assert_eq!(status_of(&weeks[5], MarkerKind::Ast), MarkerStatus::Elevated);
    }

    #[test]
    fn test_status_thresholds_are_exclusive() {
        let profile = AthleteProfile::default();
        // A neutral week carries these markers over unchanged.
        let cases = [
            (MarkerKind::SystolicBp, 130.0, 131.0, MarkerStatus::Elevated),
            (MarkerKind::DiastolicBp, 85.0, 86.0, MarkerStatus::Elevated),
            (MarkerKind::Hdl, 40.0, 39.0, MarkerStatus::Low),
            (MarkerKind::Ldl, 130.0, 131.0, MarkerStatus::Elevated),
            (MarkerKind::Glucose, 100.0, 101.0, MarkerStatus::Elevated),
            (MarkerKind::TotalTestosterone, 900.0, 901.0, MarkerStatus::Elevated),
            (MarkerKind::Estradiol, 45.0, 46.0, MarkerStatus::Elevated),
            (MarkerKind::Hematocrit, 50.0, 50.1, MarkerStatus::Elevated),
        ];

        for (kind, at_threshold, past_threshold, flagged) in cases {
            let held = compute_weekly_health_state(&profile, &hps(), &panel_with(kind, at_threshold)).blood_markers;
            assert_eq!(held.value(kind), at_threshold, "{}", kind);
            assert_eq!(status_of(&held, kind), MarkerStatus::Normal, "{}", kind);

            let crossed = compute_weekly_health_state(&profile, &hps(), &panel_with(kind, past_threshold)).blood_markers;
            assert_eq!(status_of(&crossed, kind), flagged, "{}", kind);
        }
    }

    #[test]
    fn test_risk_order_of_operations() {
        // (40 + 10 * 0.5) * 1.3 = 58.5
        assert_eq!(calculate_risk(40.0, 45, true, "").score, 59);
        assert_eq!(calculate_risk(40.0, 45, false, "").score, 45);
        assert_eq!(calculate_risk(90.0, 70, true, "").score, 100);
        assert_eq!(calculate_risk(-10.0, 20, false, "").score, 0);
    }

    #[test]
    fn test_risk_scores_track_hps_axes() {
        let mut profile = AthleteProfile::default();
        profile.genetic_factors.push(GeneticFactor::CardioRisk);
        let load = HpsResult {
            total_cardiotoxicity: 10.0,
            total_hepatotoxicity: 4.0,
            total_nephrotoxicity: 6.0,
            total_hpta_suppression: 18.0,
            ..hps()
        };

        let risks = compute_weekly_health_state(&profile, &load, &baseline_blood_markers(None)).risk_scores;
        assert_eq!(risks.cardiovascular.score, 13);
        assert_eq!(risks.hepatic.score, 4);
        assert_eq!(risks.renal.score, 6);
        assert_eq!(risks.endocrine.score, 18);
        assert_eq!(risks.highest(), 18);
        assert!(risks.hepatic.notes.contains("ALT: 25"));
    }
}
