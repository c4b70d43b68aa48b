use aim_core::enums::{AssessmentStatus, AssessmentVariant};
use aim_db::repos::assessment::AssessmentFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    client: Option<&str>,
    status: Option<&str>,
    variant: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = AssessmentFilter {
        client_id: client.map(str::to_string),
        status: status
            .map(|raw| parse_enum::<AssessmentStatus>(raw, "status"))
            .transpose()?,
        variant: variant
            .map(|raw| parse_enum::<AssessmentVariant>(raw, "variant"))
            .transpose()?,
        limit: Some(effective_limit(
            limit,
            flags.limit,
            ctx.config.general.default_limit,
        )),
    };

    let assessments = ctx.service.list_assessments(&filter).await?;
    output(&assessments, flags.format)
}
