use clap::Subcommand;

/// Pillar and catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PillarCommands {
    /// List pillars in catalog order.
    List,
    /// Get a pillar by ID or key.
    Get { pillar: String },
    /// Change a pillar's weight in the overall score.
    SetWeight { pillar: String, weight: f64 },
    /// List catalog questions.
    Questions {
        /// EXPRESS or ADVANCED
        #[arg(long)]
        variant: Option<String>,
        /// Pillar ID or key
        #[arg(long)]
        pillar: Option<String>,
    },
}
