//! SkyRoutes CLI library.
//!
//! This crate provides the command handlers and output formatting used by the
//! `skyroutes-cli` binary.

pub mod commands;
pub mod output;
