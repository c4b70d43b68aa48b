use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(pillar: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pillar = ctx.service.get_pillar(pillar).await?;
    output(&pillar, flags.format)
}
