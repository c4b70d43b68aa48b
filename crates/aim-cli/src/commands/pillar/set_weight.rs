use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    pillar: &str,
    weight: f64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let pillar = ctx.service.set_pillar_weight(pillar, weight).await?;
    output(&pillar, flags.format)
}
