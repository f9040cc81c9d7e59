//! Operations module
//!
//! Coordinates the initialization run: state detection, configuration
//! collection, bulk rewriting, and template-artifact retirement

pub mod finalize;
pub mod init;

pub use finalize::*;
pub use init::*;
