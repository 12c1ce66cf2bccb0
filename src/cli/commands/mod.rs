//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod batch;
pub mod init;
pub mod query;
pub mod status;
pub mod validate;
