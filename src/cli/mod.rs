//! Command line interface for the `wordgraph` binary.

pub mod args;
pub mod commands;
