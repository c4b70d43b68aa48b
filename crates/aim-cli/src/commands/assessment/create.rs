use aim_core::enums::AssessmentVariant;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    client: &str,
    variant: Option<&str>,
    created_by: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let variant = match variant {
        Some(raw) => parse_enum::<AssessmentVariant>(raw, "variant")?,
        None => ctx.config.general.default_variant,
    };

    let assessment = ctx
        .service
        .create_assessment(client, variant, created_by)
        .await?;
    output(&assessment, flags.format)
}
