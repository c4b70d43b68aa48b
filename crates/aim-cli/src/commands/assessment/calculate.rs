use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = ctx
        .service
        .calculate(id)
        .await
        .with_context(|| format!("failed to score assessment {id}"))?;
    output(&result, flags.format)
}
