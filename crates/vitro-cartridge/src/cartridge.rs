//! The activatable biology session.

use crate::error::{CartridgeError, CartridgeResult};
use crate::ethics::{EthicsEvaluator, ExperimentIntent, DEFAULT_VALUE};
use crate::knowledge::{DomainRecord, KnowledgeStore};
use crate::planner::{ExperimentPlan, ExperimentPlanner};
use crate::tools::ToolFacade;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use vitro_core::types::{Hypothesis, ResearchDomain};

/// Confidence the cartridge reports about itself.
pub const CARTRIDGE_CONFIDENCE: f64 = 0.85;

/// Keyword routes, checked in order against the lowercased query.
pub const QUERY_ROUTES: [(&str, ResearchDomain); 2] = [
    ("organoid", ResearchDomain::UterineOrganoid),
    ("stem", ResearchDomain::StemCells),
];

/// Domain used when no route matches.
pub const FALLBACK_DOMAIN: ResearchDomain = ResearchDomain::Endometrium;

/// Intent checked before every project start.
pub const PROJECT_INTENT: ExperimentIntent = ExperimentIntent {
    animal_test: false,
    requires_human_sample: true,
    consent: true,
};

/// Session mode; mirrors the active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Standby,
    Active,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Standby => write!(f, "standby"),
            Mode::Active => write!(f, "active"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Initiated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthicsVerdict {
    Approved,
}

/// Returned by [`Cartridge::activate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationReport {
    pub status: String,
    pub domain: String,
    pub expertise: String,
    pub confidence: f64,
    pub ethical_mode: String,
    pub available_methods: Vec<String>,
}

/// Result of routing a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
    pub domain: ResearchDomain,
    pub knowledge: Option<DomainRecord>,
    pub research_value: f64,
    pub emotional_response: String,
    pub mode: Mode,
    pub status: String,
}

/// An entry in the project ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchProject {
    /// `BIO_001`, `BIO_002`, ...
    pub id: String,
    pub hypothesis: String,
    pub plan: ExperimentPlan,
    pub status: ProjectStatus,
    pub ethics: EthicsVerdict,
}

/// Snapshot of the session for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartridgeStatus {
    pub cartridge: String,
    pub active: bool,
    pub mode: Mode,
    pub projects: usize,
    pub confidence: f64,
    pub ethics: String,
}

/// Biology cartridge: knowledge, ethics, planning and tools behind an
/// activate/deactivate switch, plus an append-only project ledger.
pub struct Cartridge {
    knowledge: KnowledgeStore,
    ethics: EthicsEvaluator,
    planner: ExperimentPlanner,
    tools: ToolFacade,
    active: bool,
    mode: Mode,
    projects: Vec<ResearchProject>,
}

impl Cartridge {
    /// New session in standby.
    pub fn new(knowledge: KnowledgeStore) -> Self {
        Self {
            knowledge,
            ethics: EthicsEvaluator::new(),
            planner: ExperimentPlanner::new(),
            tools: ToolFacade::new(),
            active: false,
            mode: Mode::Standby,
            projects: Vec::new(),
        }
    }

    /// Switch to active. Calling it again while active only re-logs.
    pub fn activate(&mut self) -> ActivationReport {
        info!("🧬 BIO-CARTRIDGE ACTIVATED");
        info!("  → switching to biology specialization");
        info!("  → loading uterine organoid knowledge");
        info!("  → initializing research protocols");
        info!("  → ethics constraints: ENABLED");

        self.active = true;
        self.mode = Mode::Active;

        ActivationReport {
            status: "activated".into(),
            domain: "biology".into(),
            expertise: "uterine organoid & stem cell research".into(),
            confidence: CARTRIDGE_CONFIDENCE,
            ethical_mode: "strict".into(),
            available_methods: self.planner.protocols().iter().map(|p| p.key.clone()).collect(),
        }
    }

    pub fn deactivate(&mut self) {
        info!("🧬 BIO-CARTRIDGE DEACTIVATED");
        self.active = false;
        self.mode = Mode::Standby;
    }

    /// Classify `query` by keyword and attach what is known about the domain.
    pub fn route_query(&self, query: &str) -> CartridgeResult<QueryResponse> {
        self.ensure_active()?;
        info!(query, "processing query");

        let lower = query.to_lowercase();
        let routed = QUERY_ROUTES
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, domain)| *domain);

        let (domain, knowledge, research_value) = match routed {
            Some(domain) => (
                domain,
                self.knowledge.recall(domain.as_str()).cloned(),
                self.ethics.score(domain.as_str()),
            ),
            None => (FALLBACK_DOMAIN, None, DEFAULT_VALUE),
        };

        Ok(QueryResponse {
            query: query.to_string(),
            domain,
            knowledge,
            research_value,
            emotional_response: self.ethics.emotional_response("interest").to_string(),
            mode: self.mode,
            status: "processed".into(),
        })
    }

    /// Check ethics, plan, and append a project to the ledger.
    pub fn start_project(&mut self, hypothesis: &Hypothesis) -> CartridgeResult<ResearchProject> {
        self.start_project_with(hypothesis, &PROJECT_INTENT)
    }

    /// Like [`start_project`](Self::start_project) with an explicit intent.
    pub fn start_project_with(
        &mut self,
        hypothesis: &Hypothesis,
        intent: &ExperimentIntent,
    ) -> CartridgeResult<ResearchProject> {
        self.ensure_active()?;

        let check = self.ethics.validate(intent);
        if !check.ok {
            return Err(CartridgeError::EthicsRejected {
                message: check.message,
            });
        }

        let plan = self.planner.plan(hypothesis);
        let project = ResearchProject {
            id: format!("BIO_{:03}", self.projects.len() + 1),
            hypothesis: hypothesis.statement.clone(),
            plan,
            status: ProjectStatus::Initiated,
            ethics: EthicsVerdict::Approved,
        };
        info!(id = %project.id, "research project started");

        self.projects.push(project.clone());
        Ok(project)
    }

    pub fn status(&self) -> CartridgeStatus {
        CartridgeStatus {
            cartridge: "bio".into(),
            active: self.active,
            mode: self.mode,
            projects: self.projects.len(),
            confidence: CARTRIDGE_CONFIDENCE,
            ethics: "enabled".into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    pub fn knowledge_mut(&mut self) -> &mut KnowledgeStore {
        &mut self.knowledge
    }

    pub fn planner(&self) -> &ExperimentPlanner {
        &self.planner
    }

    pub fn ethics(&self) -> &EthicsEvaluator {
        &self.ethics
    }

    pub fn tools(&self) -> &ToolFacade {
        &self.tools
    }

    /// Ledger, oldest first.
    pub fn projects(&self) -> &[ResearchProject] {
        &self.projects
    }

    fn ensure_active(&self) -> CartridgeResult<()> {
        if self.active {
            Ok(())
        } else {
            Err(CartridgeError::Inactive)
        }
    }
}
