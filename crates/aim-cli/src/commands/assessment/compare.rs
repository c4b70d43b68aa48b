use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(a: &str, b: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comparison = ctx.service.compare_assessments(a, b).await?;
    output(&comparison, flags.format)
}
