//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use hound_models::ObjectKind;

/// Run an image through the Sighthound cloud API.
#[derive(Parser, Debug)]
#[command(name = "hound")]
#[command(version)]
#[command(about = "Run an image through the Sighthound cloud API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// What the binary was asked to do.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the configured endpoint
    Detect {
        /// Image file to submit
        image: PathBuf,
    },

    /// Run recognition for one category
    Recognize {
        /// Object category (licenseplate, vehicle, ...)
        #[arg(value_parser = ObjectKind::from_str)]
        kind: ObjectKind,
        /// Image file to submit
        image: PathBuf,
    },
}

impl Command {
    pub fn image(&self) -> &PathBuf {
        match self {
            Command::Detect { image } | Command::Recognize { image, .. } => image,
        }
    }
}
