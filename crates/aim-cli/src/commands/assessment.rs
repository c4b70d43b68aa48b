#[path = "assessment/answer.rs"]
mod answer;
#[path = "assessment/answers.rs"]
mod answers;
#[path = "assessment/calculate.rs"]
mod calculate;
#[path = "assessment/compare.rs"]
mod compare;
#[path = "assessment/create.rs"]
mod create;
#[path = "assessment/get.rs"]
mod get;
#[path = "assessment/list.rs"]
mod list;
#[path = "assessment/scores.rs"]
mod scores;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssessmentCommands;
use crate::context::AppContext;

/// Handle `aim assessment`.
pub async fn handle(
    action: &AssessmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssessmentCommands::Create {
            client,
            variant,
            created_by,
        } => create::run(client, variant.as_deref(), created_by.as_deref(), ctx, flags).await,
        AssessmentCommands::List {
            client,
            status,
            variant,
            limit,
        } => {
            list::run(
                client.as_deref(),
                status.as_deref(),
                variant.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        AssessmentCommands::Get { id } => get::run(id, ctx, flags).await,
        AssessmentCommands::Answer { id, file, json } => {
            answer::run(id, file.as_deref(), json.as_deref(), ctx, flags).await
        }
        AssessmentCommands::Answers { id } => answers::run(id, ctx, flags).await,
        AssessmentCommands::Calculate { id } => calculate::run(id, ctx, flags).await,
        AssessmentCommands::Scores { id } => scores::run(id, ctx, flags).await,
        AssessmentCommands::Compare { a, b } => compare::run(a, b, ctx, flags).await,
    }
}
