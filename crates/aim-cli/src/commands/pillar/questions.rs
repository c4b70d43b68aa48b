use aim_core::enums::AssessmentVariant;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    variant: Option<&str>,
    pillar: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let variant = variant
        .map(|raw| parse_enum::<AssessmentVariant>(raw, "variant"))
        .transpose()?;

    let mut questions = ctx.service.list_questions(variant, pillar).await?;
    if let Some(limit) = flags.limit {
        questions.truncate(usize::try_from(limit)?);
    }

    output(&questions, flags.format)
}
