//! Research value scoring and ethics validation.

use serde::{Deserialize, Serialize};

/// Value score for topics without an entry.
pub const DEFAULT_VALUE: f64 = 0.5;

/// Guiding principles, as `(key, description)`.
pub const CORE_VALUES: [(&str, &str); 5] = [
    ("life_ethics", "Bioethics comes first"),
    ("reproducibility", "Results must be reproducible"),
    ("transparency", "Methods and data are disclosed"),
    ("innovation", "Pursue new approaches"),
    ("clinical_translation", "Aim for clinical application"),
];

/// Work items by priority tier, highest first.
pub const RESEARCH_PRIORITIES: [(&str, &[&str]); 4] = [
    ("critical", &["organoid validation", "safety assessment"]),
    ("high", &["protocol standardization", "publication"]),
    ("medium", &["new technique development"]),
    ("low", &["supplementary analysis"]),
];

const VALUE_TABLE: [(&str, f64); 5] = [
    ("uterine_organoid", 0.95),
    ("stem_cells", 0.90),
    ("endometrium", 0.85),
    ("tissue_engineering", 0.85),
    ("cell_signaling", 0.75),
];

const EMOTIONAL_RESPONSES: [(&str, &str); 5] = [
    ("breakthrough", "🔥 very exciting (novel finding)"),
    ("null_result", "🤔 puzzling (needs root-cause analysis)"),
    ("error", "😕 concerned (check reproducibility)"),
    ("success", "😊 satisfied (goal reached)"),
    ("publication", "🎉 celebrating (recognition earned)"),
];

/// What an experiment would involve, as far as ethics is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentIntent {
    #[serde(default)]
    pub animal_test: bool,
    #[serde(default)]
    pub requires_human_sample: bool,
    #[serde(default)]
    pub consent: bool,
}

/// Pass/fail verdict with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthicsCheck {
    pub ok: bool,
    pub message: String,
}

impl EthicsCheck {
    fn pass(message: &str) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            ok: false,
            message: message.to_string(),
        }
    }
}

/// Stateless value and ethics rules.
#[derive(Debug, Clone, Default)]
pub struct EthicsEvaluator;

impl EthicsEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Research value of a domain key, 0.5 when unknown.
    pub fn score(&self, topic: &str) -> f64 {
        VALUE_TABLE
            .iter()
            .find(|(key, _)| *key == topic)
            .map(|(_, value)| *value)
            .unwrap_or(DEFAULT_VALUE)
    }

    /// Animal testing is checked before consent.
    pub fn validate(&self, intent: &ExperimentIntent) -> EthicsCheck {
        if intent.animal_test {
            return EthicsCheck::fail(
                "❌ animal testing restricted: reconsider a tissue-engineering approach",
            );
        }
        if intent.requires_human_sample && !intent.consent {
            return EthicsCheck::fail("❌ no consent for human sample use");
        }
        EthicsCheck::pass("✅ ethics check passed")
    }

    /// Constraints every project is held to.
    pub fn ethical_constraints(&self) -> &'static [&'static str] {
        &[
            "minimize animal experiments (prefer tissue engineering)",
            "consent required for human endometrial samples",
            "protect personal data",
            "publish results transparently",
            "publish negative results too",
        ]
    }

    /// Reaction to a research event; `"neutral"` for unknown events.
    pub fn emotional_response(&self, event: &str) -> &'static str {
        EMOTIONAL_RESPONSES
            .iter()
            .find(|(key, _)| *key == event)
            .map(|(_, response)| *response)
            .unwrap_or("neutral")
    }
}
