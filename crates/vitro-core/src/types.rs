//! Shared domain types.

use crate::error::{Result, VitroError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biology research domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchDomain {
    UterineOrganoid,
    Endometrium,
    StemCells,
    TissueEngineering,
    CellSignaling,
}

impl ResearchDomain {
    /// Every declared domain, in declaration order.
    pub const ALL: [ResearchDomain; 5] = [
        ResearchDomain::UterineOrganoid,
        ResearchDomain::Endometrium,
        ResearchDomain::StemCells,
        ResearchDomain::TissueEngineering,
        ResearchDomain::CellSignaling,
    ];

    /// Stable snake_case key used by lookup tables and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchDomain::UterineOrganoid => "uterine_organoid",
            ResearchDomain::Endometrium => "endometrium",
            ResearchDomain::StemCells => "stem_cells",
            ResearchDomain::TissueEngineering => "tissue_engineering",
            ResearchDomain::CellSignaling => "cell_signaling",
        }
    }
}

impl fmt::Display for ResearchDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResearchDomain {
    type Err = VitroError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace('-', "_");
        ResearchDomain::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| VitroError::unknown_domain(s))
    }
}

/// A proposed biological claim.
///
/// Created by the caller and consumed once by the experiment planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// The claim itself.
    pub statement: String,
    /// Domain the claim belongs to.
    pub domain: ResearchDomain,
    /// Supporting evidence, in the order it was gathered.
    pub evidence: Vec<String>,
    /// Prior confidence (0.0-1.0).
    pub confidence: f64,
    /// Free-text description of the intended design.
    pub design: String,
}

impl Hypothesis {
    /// Create a hypothesis with no evidence and neutral confidence.
    pub fn new(statement: impl Into<String>, domain: ResearchDomain) -> Self {
        Self {
            statement: statement.into(),
            domain,
            evidence: Vec::new(),
            confidence: 0.5,
            design: String::new(),
        }
    }

    /// Add a piece of supporting evidence.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence.push(evidence.into());
        self
    }

    /// Set the confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set the design description.
    pub fn with_design(mut self, design: impl Into<String>) -> Self {
        self.design = design.into();
        self
    }
}
