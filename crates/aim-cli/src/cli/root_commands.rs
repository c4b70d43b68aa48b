use clap::Subcommand;

use crate::cli::subcommands::{AssessmentCommands, PillarCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database, run migrations, and seed the question catalog.
    Init,
    /// Pillars, weights, and the question catalog.
    Pillar {
        #[command(subcommand)]
        action: PillarCommands,
    },
    /// Assessments: answers, scoring, and comparison.
    Assessment {
        #[command(subcommand)]
        action: AssessmentCommands,
    },
    /// Portfolio statistics over all assessments.
    Dashboard,
}
