//! Experiment design and descriptive statistics.

use serde::{Deserialize, Serialize};
use tracing::info;
use vitro_core::types::{Hypothesis, ResearchDomain};

/// Samples per group. A fixed figure, not derived from `statistical_power`.
pub const SAMPLE_SIZE: usize = 30;
/// Target power recorded on every plan.
pub const STATISTICAL_POWER: f64 = 0.8;

/// Positive, negative and internal controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub internal: Vec<String>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            positive: vec!["established protocol results".into(), "positive marker".into()],
            negative: vec!["untreated cells".into(), "unrelated marker".into()],
            internal: vec!["housekeeping genes".into()],
        }
    }
}

/// Phase durations in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub preparation: u32,
    pub execution: u32,
    pub analysis: u32,
    pub writing: u32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            preparation: 3,
            execution: 14,
            analysis: 7,
            writing: 10,
        }
    }
}

impl Timeline {
    /// Sum of all phases.
    pub fn total(&self) -> u32 {
        self.preparation + self.execution + self.analysis + self.writing
    }
}

/// Structured experimental plan for one hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentPlan {
    pub hypothesis: String,
    pub domain: ResearchDomain,
    pub methods: Vec<String>,
    pub controls: Controls,
    pub timeline: Timeline,
    pub success_criteria: Vec<String>,
    pub statistical_power: f64,
    pub sample_size: usize,
}

/// Descriptive statistics over a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub mean: f64,
    /// Sample standard deviation; 0 for a single value.
    pub stdev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
    /// Coefficient of variation; 0 when the mean is 0.
    pub cv: f64,
}

/// A laboratory protocol from the built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    pub key: String,
    pub name: String,
    pub duration_days: u32,
    pub steps: Vec<String>,
    pub critical_points: Vec<String>,
    /// Expected yield, when the protocol has a known one.
    pub efficiency: Option<f64>,
}

/// Designs experiments from fixed lookup tables.
#[derive(Debug, Clone)]
pub struct ExperimentPlanner {
    protocols: Vec<Protocol>,
}

impl Default for ExperimentPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperimentPlanner {
    pub fn new() -> Self {
        Self {
            protocols: builtin_protocols(),
        }
    }

    /// Build a plan; unmapped domains get an empty method list.
    pub fn plan(&self, hypothesis: &Hypothesis) -> ExperimentPlan {
        let plan = ExperimentPlan {
            hypothesis: hypothesis.statement.clone(),
            domain: hypothesis.domain,
            methods: methods_for(hypothesis.domain)
                .iter()
                .map(|m| m.to_string())
                .collect(),
            controls: Controls::default(),
            timeline: Timeline::default(),
            success_criteria: vec![
                "P < 0.05 statistical significance".into(),
                "reproduced in 3 independent runs".into(),
                "biological relevance demonstrated".into(),
            ],
            statistical_power: STATISTICAL_POWER,
            sample_size: SAMPLE_SIZE,
        };
        info!(
            domain = %plan.domain,
            days = plan.timeline.total(),
            "experiment designed"
        );
        plan
    }

    /// Mean, spread and range of `samples`, or `None` when empty.
    pub fn summarize(&self, samples: &[f64]) -> Option<SampleSummary> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let stdev = if n > 1 {
            let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        Some(SampleSummary {
            mean,
            stdev,
            median,
            min: sorted[0],
            max: sorted[n - 1],
            n,
            cv: if mean != 0.0 { stdev / mean } else { 0.0 },
        })
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    /// Look up a protocol by key, e.g. `"organoid_culture"`.
    pub fn protocol(&self, key: &str) -> Option<&Protocol> {
        self.protocols.iter().find(|p| p.key == key)
    }
}

fn methods_for(domain: ResearchDomain) -> &'static [&'static str] {
    match domain {
        ResearchDomain::UterineOrganoid => &[
            "3D culture",
            "immunofluorescence",
            "qPCR",
            "confocal microscopy",
        ],
        ResearchDomain::StemCells => &[
            "differentiation",
            "flow cytometry",
            "RNA-seq",
            "immunostaining",
        ],
        ResearchDomain::Endometrium => &["tissue sectioning", "histology", "immunohistochemistry"],
        ResearchDomain::TissueEngineering | ResearchDomain::CellSignaling => &[],
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_protocols() -> Vec<Protocol> {
    vec![
        Protocol {
            key: "organoid_culture".into(),
            name: "Organoid 3D culture".into(),
            duration_days: 14,
            steps: owned(&[
                "collect and purify cells",
                "mix with Matrigel",
                "assemble 3D culture system",
                "hormone stimulation",
            ]),
            critical_points: owned(&["temperature", "pH", "growth factors"]),
            efficiency: None,
        },
        Protocol {
            key: "differentiation".into(),
            name: "Stem cell differentiation".into(),
            duration_days: 21,
            steps: owned(&[
                "prepare ESCs",
                "BMP4 treatment",
                "Activin A treatment",
                "selection and confirmation",
            ]),
            critical_points: Vec::new(),
            efficiency: Some(0.75),
        },
    ]
}
