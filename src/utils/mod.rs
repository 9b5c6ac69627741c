//! Utility modules for the deploy tool.

pub mod exec;
pub mod git;
