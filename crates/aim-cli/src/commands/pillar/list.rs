use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pillars = ctx.service.list_pillars().await?;
    output(&pillars, flags.format)
}
