//! CLI command implementations.

pub mod init;
pub mod analyze;
pub mod stats;
pub mod cartridge;
