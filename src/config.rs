use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{EngineError, EngineResult};

/// The complete input bundle for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub profile: AthleteProfile,
    pub nutrition: NutritionPlan,
    pub protocol_phases: Vec<Phase>,
    #[serde(default)]
    pub support: Vec<DoseEntry>,
    #[serde(default)]
    pub pct: Vec<DoseEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    /// Body weight in kg.
    pub weight: f64,
    #[serde(alias = "bfp")]
    pub body_fat_pct: f64,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub genetic_factors: Vec<GeneticFactor>,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_blood_work: Option<BloodWork>,
}

impl AthleteProfile {
    pub fn has_genetic_factor(&self, factor: GeneticFactor) -> bool {
        self.genetic_factors.contains(&factor)
    }
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            weight: 85.0,
            body_fat_pct: 15.0,
            goal: Goal::LeanGain,
            experience_level: ExperienceLevel::Intermediate,
            genetic_factors: Vec::new(),
            medical_history: String::new(),
            baseline_blood_work: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[serde(alias = "goals.aggressive_bulk")]
    AggressiveBulk,
    #[serde(alias = "goals.lean_gain")]
    LeanGain,
    #[serde(alias = "goals.recomposition")]
    Recomposition,
    #[serde(alias = "goals.moderate_cut")]
    ModerateCut,
    #[serde(alias = "goals.aggressive_shred")]
    AggressiveShred,
    #[serde(alias = "goals.competition_prep")]
    CompetitionPrep,
    #[serde(alias = "goals.anti_aging")]
    AntiAging,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneticFactor {
    #[serde(alias = "genetics.cardio_risk")]
    CardioRisk,
    #[serde(alias = "genetics.aromatization")]
    Aromatization,
    #[serde(alias = "genetics.alopecia")]
    Alopecia,
    #[serde(alias = "genetics.lipid_response")]
    LipidResponse,
    #[serde(other)]
    Other,
}

/// Optional user-supplied baseline bloodwork. Missing values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodWork {
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub hdl: Option<f64>,
    pub ldl: Option<f64>,
    pub glucose: Option<f64>,
    pub total_testosterone: Option<f64>,
    pub alt: Option<f64>,
    pub ast: Option<f64>,
    pub egfr: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Planned daily intake in kcal.
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub supplements: Vec<Supplement>,
}

impl NutritionPlan {
    pub fn has_supplement(&self, supplement: Supplement) -> bool {
        self.supplements.contains(&supplement)
    }
}

impl Default for NutritionPlan {
    fn default() -> Self {
        Self {
            calories: 3000.0,
            protein: 180.0,
            carbs: 350.0,
            fat: 80.0,
            supplements: vec![Supplement::Creatine, Supplement::Omega3, Supplement::Whey],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Supplement {
    #[serde(alias = "supplements.creatine")]
    Creatine,
    #[serde(alias = "supplements.omega3")]
    Omega3,
    #[serde(alias = "supplements.d3")]
    D3,
    #[serde(alias = "supplements.whey")]
    Whey,
    #[serde(alias = "supplements.glutamine")]
    Glutamine,
    #[serde(alias = "supplements.nac")]
    Nac,
    #[serde(alias = "supplements.tudca")]
    Tudca,
    #[serde(alias = "supplements.bergamot")]
    Bergamot,
    #[serde(alias = "supplements.coq10")]
    Coq10,
    #[serde(alias = "supplements.ashwagandha")]
    Ashwagandha,
    #[serde(alias = "supplements.berberine")]
    Berberine,
    #[serde(other)]
    Other,
}

/// One ordered, time-boxed segment of the main regimen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub duration_weeks: u32,
    #[serde(default)]
    pub compounds: Vec<DoseEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseEntry {
    pub compound: String,
    /// mg (or mg-equivalent) per administration.
    pub dosage: f64,
    pub frequency: Frequency,
    /// Only meaningful for post-cycle entries; the longest one sets the PCT length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
}

impl DoseEntry {
    pub fn new(compound: &str, dosage: f64, frequency: Frequency) -> Self {
        Self {
            compound: compound.to_string(),
            dosage,
            frequency,
            duration_weeks: None,
        }
    }

    /// "None" or an empty name marks an unused slot.
    pub fn is_placeholder(&self) -> bool {
        let name = self.compound.trim();
        name.is_empty() || name == "None"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Eod,
    E3d,
    Weekly,
    #[serde(rename = "bi-weekly", alias = "biweekly")]
    Biweekly,
}

impl Frequency {
    pub fn doses_per_week(self) -> f64 {
        match self {
            Frequency::Daily => 7.0,
            Frequency::Eod => 3.5,
            Frequency::E3d => 2.33,
            Frequency::Weekly => 1.0,
            Frequency::Biweekly => 0.5,
        }
    }
}

impl SimulationInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let input: SimulationInput = serde_json::from_str(&content)?;
        input.validate()?;
        Ok(input)
    }

    /// Boundary checks for bundles read from disk. The engine itself accepts any
    /// well-typed bundle and never calls this.
    pub fn validate(&self) -> EngineResult<()> {
        let profile = &self.profile;

        if !profile.weight.is_finite() || profile.weight <= 0.0 {
            return Err(EngineError::InvalidInput(
                "Body weight must be a positive number of kg".to_string(),
            ));
        }

        if !(0.0..100.0).contains(&profile.body_fat_pct) {
            return Err(EngineError::InvalidInput(
                "Body fat percentage must be in [0, 100)".to_string(),
            ));
        }

        if !self.nutrition.calories.is_finite() || self.nutrition.calories < 0.0 {
            return Err(EngineError::Validation(
                "Planned calories must be a non-negative number".to_string(),
            ));
        }

        self.validate_doses()
    }

    fn validate_doses(&self) -> EngineResult<()> {
        let all_doses = self
            .protocol_phases
            .iter()
            .flat_map(|phase| phase.compounds.iter())
            .chain(self.support.iter())
            .chain(self.pct.iter());

        for dose in all_doses {
            if !dose.dosage.is_finite() || dose.dosage < 0.0 {
                return Err(EngineError::Validation(format!(
                    "Dosage for {} must be a non-negative number",
                    dose.compound
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE: &str = r#"{
        "profile": {
            "age": 30, "weight": 85, "bfp": 15, "goal": "goals.lean_gain",
            "genetic_factors": ["genetics.alopecia", "left_handed"],
            "baseline_blood_work": { "systolic_bp": 125, "alt": 30 }
        },
        "nutrition": { "calories": 3000, "supplements": ["supplements.omega3", "kale"] },
        "protocol_phases": [
            { "name": "Main", "duration_weeks": 12, "compounds": [
                { "compound": "Testosterone Enanthate", "dosage": 500, "frequency": "weekly" }
            ]}
        ],
        "pct": [
            { "compound": "None", "dosage": 0, "frequency": "daily", "duration_weeks": 4 }
        ]
    }"#;

    #[test]
    fn test_parse_bundle_with_namespaced_keys() {
        let input: SimulationInput = serde_json::from_str(BUNDLE).unwrap();

        assert_eq!(input.profile.goal, Goal::LeanGain);
        assert_eq!(input.profile.body_fat_pct, 15.0);
        assert!(input.profile.has_genetic_factor(GeneticFactor::Alopecia));
        assert!(input.profile.genetic_factors.contains(&GeneticFactor::Other));
        assert!(input.nutrition.has_supplement(Supplement::Omega3));
        assert!(input.support.is_empty());
        assert!(input.pct[0].is_placeholder());

        let baseline = input.profile.baseline_blood_work.as_ref().unwrap();
        assert_eq!(baseline.systolic_bp, Some(125.0));
        assert_eq!(baseline.hdl, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unknown_goal_falls_back() {
        let goal: Goal = serde_json::from_str("\"goals.become_a_centaur\"").unwrap();
        assert_eq!(goal, Goal::Unspecified);
    }

    #[test]
    fn test_frequency_multipliers() {
        let freq: Frequency = serde_json::from_str("\"bi-weekly\"").unwrap();
        assert_eq!(freq.doses_per_week(), 0.5);
        assert_eq!(Frequency::Daily.doses_per_week(), 7.0);
        assert_eq!(Frequency::Eod.doses_per_week(), 3.5);
        assert_eq!(Frequency::E3d.doses_per_week(), 2.33);
        assert_eq!(Frequency::Weekly.doses_per_week(), 1.0);
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(DoseEntry::new("None", 100.0, Frequency::Daily).is_placeholder());
        assert!(DoseEntry::new("  ", 100.0, Frequency::Daily).is_placeholder());
        assert!(!DoseEntry::new("Telmisartan", 40.0, Frequency::Daily).is_placeholder());
    }

    #[test]
    fn test_validation_rejects_bad_profile() {
        let mut input: SimulationInput = serde_json::from_str(BUNDLE).unwrap();
        input.profile.body_fat_pct = 120.0;
        assert!(matches!(input.validate(), Err(EngineError::InvalidInput(_))));

        let mut input: SimulationInput = serde_json::from_str(BUNDLE).unwrap();
        input.protocol_phases[0].compounds[0].dosage = -5.0;
        assert!(matches!(input.validate(), Err(EngineError::Validation(_))));
    }
}
