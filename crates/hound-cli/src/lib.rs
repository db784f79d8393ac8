//! Command-line runner for the Sighthound cloud API.
//!
//! Argument parsing and report building live here so the binary stays thin.

pub mod command;
pub mod report;

pub use command::{Cli, Command};
pub use report::{build_report, Located, Report};
