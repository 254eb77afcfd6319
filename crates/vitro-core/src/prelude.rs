//! Vitro Core Prelude - convenient imports for common usage.
//!
//! ```rust
//! use vitro_core::prelude::*;
//! ```

pub use crate::types::{Hypothesis, ResearchDomain};

pub use crate::error::{Result, ValidationError, VitroError};
