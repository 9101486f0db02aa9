//! # jsonmerge-cli
//!
//! Command-line front end for jsonmerge:
//! - Select input files (paths or glob patterns) and an output location
//! - Run the merge on a background worker with live progress
//! - Print merge summaries
//! - Manage the configuration file

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod folder;
pub mod logging;
pub mod render;
