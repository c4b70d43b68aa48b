use std::path::PathBuf;

use clap::Subcommand;

/// Assessment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssessmentCommands {
    /// Start a new DRAFT assessment for a client.
    Create {
        #[arg(long)]
        client: String,
        /// EXPRESS or ADVANCED (defaults to general.default_variant)
        #[arg(long)]
        variant: Option<String>,
        #[arg(long)]
        created_by: Option<String>,
    },
    /// List assessments, newest first.
    List {
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        variant: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an assessment by ID.
    Get { id: String },
    /// Submit answers as a JSON array of {questionId, score, notApplicable}.
    Answer {
        id: String,
        #[arg(long, conflicts_with = "json", required_unless_present = "json")]
        file: Option<PathBuf>,
        #[arg(long)]
        json: Option<String>,
    },
    /// List recorded answers.
    Answers { id: String },
    /// Score an assessment and persist the result.
    Calculate { id: String },
    /// Show persisted pillar scores with a recommendation per pillar.
    Scores { id: String },
    /// Compare two assessments pillar by pillar (delta = b - a).
    Compare { a: String, b: String },
}
