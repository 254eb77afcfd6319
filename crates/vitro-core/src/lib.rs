//! # Vitro Core
//!
//! Shared types for the Vitro research assistant.
//!
//! Both halves of the workspace speak the same small vocabulary:
//!
//! - **ResearchDomain** - the fixed set of biology specializations
//! - **Hypothesis** - a proposed biological claim handed to the planner
//! - **VitroError** - structured errors for validation and I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use vitro_core::prelude::*;
//!
//! let h = Hypothesis::new(
//!     "Hormone stimulation enhances organoid maturation",
//!     ResearchDomain::UterineOrganoid,
//! )
//! .with_confidence(0.7);
//!
//! assert_eq!(h.domain.as_str(), "uterine_organoid");
//! ```

pub mod error;
pub mod types;
pub mod prelude;
