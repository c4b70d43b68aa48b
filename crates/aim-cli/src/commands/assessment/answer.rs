use std::path::Path;

use anyhow::{Context, bail};
use aim_core::entities::AnswerSubmission;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    file: Option<&Path>,
    json: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = match (file, json) {
        (Some(path), None) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers from {}", path.display()))?,
        (None, Some(inline)) => inline.to_string(),
        _ => bail!("pass exactly one of --file or --json"),
    };

    let submissions = parse_submissions(&raw)?;
    tracing::debug!(assessment = id, count = submissions.len(), "submitting answers");

    let summary = ctx.service.submit_answers(id, &submissions).await?;
    output(&summary, flags.format)
}

/// Parse a JSON array of `{questionId, score, notApplicable}` objects.
fn parse_submissions(raw: &str) -> anyhow::Result<Vec<AnswerSubmission>> {
    serde_json::from_str(raw).context("answers must be a JSON array of {questionId, score, notApplicable}")
}
