use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `aim dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.service.dashboard_stats().await?;
    output(&stats, flags.format)
}
