use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assessment = ctx.service.get_assessment(id).await?;
    output(&assessment, flags.format)
}
