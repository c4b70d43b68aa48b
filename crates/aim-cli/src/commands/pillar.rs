#[path = "pillar/get.rs"]
mod get;
#[path = "pillar/list.rs"]
mod list;
#[path = "pillar/questions.rs"]
mod questions;
#[path = "pillar/set_weight.rs"]
mod set_weight;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PillarCommands;
use crate::context::AppContext;

/// Handle `aim pillar`.
pub async fn handle(
    action: &PillarCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PillarCommands::List => list::run(ctx, flags).await,
        PillarCommands::Get { pillar } => get::run(pillar, ctx, flags).await,
        PillarCommands::SetWeight { pillar, weight } => {
            set_weight::run(pillar, *weight, ctx, flags).await
        }
        PillarCommands::Questions { variant, pillar } => {
            questions::run(variant.as_deref(), pillar.as_deref(), ctx, flags).await
        }
    }
}
