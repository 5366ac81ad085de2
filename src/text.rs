//! Translatable text descriptors.
//!
//! The engine emits message keys with interpolation values; turning them into
//! prose is left to a presentation layer. [`render_en`] is the built-in English
//! catalog used by the Markdown report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslatableText {
    Keyed {
        key: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        values: BTreeMap<String, TextValue>,
    },
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Number(f64),
    Text(TranslatableText),
}

impl TranslatableText {
    pub fn key(key: &str) -> Self {
        TranslatableText::Keyed {
            key: key.to_string(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_values<I>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, TextValue)>,
    {
        TranslatableText::Keyed {
            key: key.to_string(),
            values: values
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Message key, or `None` for plain text.
    pub fn message_key(&self) -> Option<&str> {
        match self {
            TranslatableText::Keyed { key, .. } => Some(key),
            TranslatableText::Plain(_) => None,
        }
    }
}

impl From<&str> for TranslatableText {
    fn from(text: &str) -> Self {
        TranslatableText::Plain(text.to_string())
    }
}

impl From<String> for TranslatableText {
    fn from(text: String) -> Self {
        TranslatableText::Plain(text)
    }
}

fn template(key: &str) -> Option<&'static str> {
    let text = match key {
        "synthesis.summary" => "Over a {duration}-week cycle: {physique} {risk}",
        "physique.gain_and_lose" => "projected gain of {muscleGain} kg muscle while losing {fatLoss} kg fat.",
        "physique.gain" => "projected gain of {muscleGain} kg muscle.",
        "physique.lose" => "projected loss of {fatLoss} kg fat.",
        "physique.maintain" => "body composition stays roughly unchanged.",
        "risk.summary.manageable" => "Peak health risk looks manageable.",
        "risk.summary.significant" => "Peak health risk is significant.",
        "risk.summary.critical" => "Peak health risk is critical.",
        "synthesis.warnings.cardio" => "High cardiovascular strain: watch blood pressure and lipids.",
        "synthesis.warnings.hepatic" => "High hepatic strain: liver enzymes are likely to rise.",
        "synthesis.warnings.renal" => "Elevated renal strain: kidney filtration may decline.",
        "synthesis.warnings.endocrine" => "Severe HPTA suppression: natural hormone production will shut down.",
        "synthesis.warnings.hair_loss" => "High androgenic load with a genetic predisposition to hair loss.",
        "synthesis.warnings.general" => "No major warnings for this protocol.",
        "synthesis.recommendations.cardio" => "Keep up omega-3 supplementation to support lipid health.",
        "synthesis.recommendations.cardio_missing" => "Consider adding omega-3 to support lipid health.",
        "synthesis.recommendations.hepatic" => "Keep up liver support (TUDCA / NAC).",
        "synthesis.recommendations.hepatic_missing" => "Consider adding liver support such as TUDCA or NAC.",
        "synthesis.recommendations.pct_defined" => "A post-cycle protocol is defined.",
        "synthesis.recommendations.pct_missing" => "No post-cycle protocol is defined; recovery will be slow.",
        "synthesis.recommendations.monitoring" => "Get bloodwork before, during and after the protocol.",
        "synthesis.long_term_outlook" => "Long-term effects depend on repetition, recovery time and individual response.",
        _ => return None,
    };
    Some(text)
}

fn render_value(value: &TextValue) -> String {
    match value {
        TextValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
        TextValue::Number(n) => format!("{:.1}", n),
        TextValue::Text(text) => render_en(text),
    }
}

/// Renders a descriptor with the English catalog. Unknown keys render as the key.
pub fn render_en(text: &TranslatableText) -> String {
    match text {
        TranslatableText::Plain(s) => s.clone(),
        TranslatableText::Keyed { key, values } => {
            let Some(pattern) = template(key) else {
                return key.clone();
            };
            values.iter().fold(pattern.to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{}}}", name), &render_value(value))
            })
        }
    }
}
