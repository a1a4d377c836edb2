//! Subcommand implementations.

pub mod ask;
pub mod storage;
