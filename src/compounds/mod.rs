//! Compound knowledge base.
//!
//! Every compound is a fixed record of trait scores on an informal 0-10 scale.
//! The engine only ever reads it through [`CompoundLookup`], so tests and callers
//! can swap in their own table.

mod catalog;

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "AAS")]
    BaseHormone,
    #[serde(alias = "Peptide")]
    Peptide,
    #[serde(alias = "Hormone")]
    Hormone,
    #[serde(alias = "SERM")]
    AntiEstrogen,
    #[serde(alias = "Support")]
    Support,
    #[serde(alias = "SARM")]
    SelectiveModulator,
    #[serde(alias = "Other")]
    None,
}

impl Category {
    /// Weekly dosage that maps to an active concentration of 1.0.
    pub fn reference_weekly_dosage(self) -> f64 {
        match self {
            Category::AntiEstrogen => 350.0,
            Category::Support => 7.0,
            _ => 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundSpec {
    pub name: String,
    pub category: Category,
    pub half_life_days: f64,
    pub anabolic: f64,
    pub androgenic: f64,
    pub hepatotoxicity: f64,
    pub cardiotoxicity: f64,
    pub hpta_suppression: f64,
    pub nephrotoxicity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpta_stimulation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estrogen_blockade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estrogen_reduction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_reduction: Option<f64>,
}

impl CompoundSpec {
    /// A compound with every trait score at zero and no modifiers.
    pub fn new(name: &str, category: Category, half_life_days: f64) -> Self {
        Self {
            name: name.to_string(),
            category,
            half_life_days,
            anabolic: 0.0,
            androgenic: 0.0,
            hepatotoxicity: 0.0,
            cardiotoxicity: 0.0,
            hpta_suppression: 0.0,
            nephrotoxicity: 0.0,
            hpta_stimulation: None,
            estrogen_blockade: None,
            estrogen_reduction: None,
            blood_pressure_reduction: None,
        }
    }
}

/// Read-only name -> trait-record lookup consumed by the sub-models.
pub trait CompoundLookup: Send + Sync {
    fn get(&self, name: &str) -> Option<&CompoundSpec>;
}

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    compounds: HashMap<String, CompoundSpec>,
}

impl KnowledgeBase {
    /// The built-in compound table.
    pub fn standard() -> Self {
        let compounds = catalog::standard_compounds()
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        Self { compounds }
    }

    pub fn from_compounds(specs: Vec<CompoundSpec>) -> EngineResult<Self> {
        let mut compounds = HashMap::with_capacity(specs.len());

        for spec in specs {
            validate_spec(&spec)?;
            if compounds.contains_key(&spec.name) {
                return Err(EngineError::InvalidCompound(format!(
                    "Duplicate compound name: {}",
                    spec.name
                )));
            }
            compounds.insert(spec.name.clone(), spec);
        }

        Ok(Self { compounds })
    }

    /// Loads a replacement table from a JSON array of compound records.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let specs: Vec<CompoundSpec> = serde_json::from_str(&content)?;
        Self::from_compounds(specs)
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

impl CompoundLookup for KnowledgeBase {
    fn get(&self, name: &str) -> Option<&CompoundSpec> {
        self.compounds.get(name)
    }
}

fn validate_spec(spec: &CompoundSpec) -> EngineResult<()> {
    if spec.name.trim().is_empty() || spec.name == "None" {
        return Err(EngineError::InvalidCompound(
            "Compound name must not be empty or the \"None\" placeholder".to_string(),
        ));
    }

    if !spec.half_life_days.is_finite() || spec.half_life_days < 0.0 {
        return Err(EngineError::InvalidCompound(format!(
            "Half-life of {} must be a non-negative number",
            spec.name
        )));
    }

    Ok(())
}
