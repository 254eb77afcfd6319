//! # Vitro Cartridge
//!
//! A self-contained biology specialization: static domain knowledge, ethics
//! rules, experiment planning and external tool stubs, composed into an
//! activatable [`Cartridge`] session.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitro_cartridge::prelude::*;
//!
//! let mut cartridge = Cartridge::new(KnowledgeStore::builtin().unwrap());
//! assert!(cartridge.route_query("organoid culture").is_err());
//!
//! cartridge.activate();
//! let response = cartridge.route_query("organoid culture").unwrap();
//! assert_eq!(response.domain, ResearchDomain::UterineOrganoid);
//!
//! let h = Hypothesis::new("Hormones enhance maturation", ResearchDomain::UterineOrganoid);
//! let project = cartridge.start_project(&h).unwrap();
//! assert_eq!(project.id, "BIO_001");
//! ```

pub mod cartridge;
pub mod error;
pub mod ethics;
pub mod knowledge;
pub mod planner;
pub mod tools;

pub use cartridge::{
    ActivationReport, Cartridge, CartridgeStatus, EthicsVerdict, Mode, ProjectStatus,
    QueryResponse, ResearchProject,
};
pub use error::{CartridgeError, CartridgeResult, ErrorResponse};
pub use ethics::{EthicsCheck, EthicsEvaluator, ExperimentIntent};
pub use knowledge::{
    CultureConditions, DomainContext, DomainDetails, DomainRecord, KnowledgeStore,
    ResearchRecord, SnapshotStatus,
};
pub use planner::{Controls, ExperimentPlan, ExperimentPlanner, Protocol, SampleSummary, Timeline};
pub use tools::{GeneRecord, LiteratureQuery, Publication, ToolFacade};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cartridge::{Cartridge, Mode, ResearchProject};
    pub use crate::error::{CartridgeError, CartridgeResult};
    pub use crate::ethics::{EthicsEvaluator, ExperimentIntent};
    pub use crate::knowledge::{KnowledgeStore, ResearchRecord, SnapshotStatus};
    pub use crate::planner::{ExperimentPlan, ExperimentPlanner, SampleSummary};
    pub use vitro_core::prelude::{Hypothesis, ResearchDomain};
}
