//! # compact-cli — Operator Tooling
//!
//! Subcommand handlers for the `compact` binary. Each submodule owns its
//! clap `Args` struct and a `run` entry point returning `anyhow::Result`.

pub mod status;
pub mod validate;
