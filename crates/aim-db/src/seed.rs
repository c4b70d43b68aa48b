//! Catalog seeding: load pillars and questions into the database.
//!
//! Reseeding is safe. Existing pillars keep their ID and weight, so an
//! operator's weight changes survive; question text is refreshed in place.
//! Question IDs are stable, so answers stay linked.

use serde::Serialize;

use aim_core::catalog::Catalog;
use aim_core::ids::PREFIX_PILLAR;

use crate::error::DatabaseError;
use crate::service::AimService;

/// What a seeding run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub pillars_created: u32,
    pub pillars_existing: u32,
    pub questions_written: u32,
}

impl AimService {
    /// Upsert a catalog's pillars and questions in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any write fails; nothing is committed then.
    pub async fn seed_catalog(&self, catalog: &Catalog) -> Result<SeedReport, DatabaseError> {
        let mut pillar_ids = Vec::with_capacity(catalog.pillars.len());
        for _ in &catalog.pillars {
            pillar_ids.push(self.db().generate_id(PREFIX_PILLAR).await?);
        }

        let tx = self.db().conn().transaction().await?;
        let written = write_catalog(&tx, catalog, &pillar_ids).await;
        match written {
            Ok(report) => {
                tx.commit().await?;
                tracing::info!(
                    created = report.pillars_created,
                    existing = report.pillars_existing,
                    questions = report.questions_written,
                    "catalog seeded"
                );
                Ok(report)
            }
            Err(e) => Err(crate::abort(tx, "seed_catalog", e).await),
        }
    }
}

async fn write_catalog(
    tx: &libsql::Transaction,
    catalog: &Catalog,
    pillar_ids: &[String],
) -> Result<SeedReport, DatabaseError> {
    let mut report = SeedReport::default();

    for (pillar, new_id) in catalog.pillars.iter().zip(pillar_ids) {
        let inserted = tx
            .execute(
                "INSERT INTO pillars (id, key, name, description, weight, ord)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(key) DO NOTHING",
                libsql::params![
                    new_id.as_str(),
                    pillar.key.as_str(),
                    pillar.name.as_str(),
                    pillar.description.as_deref(),
                    pillar.weight,
                    i64::from(pillar.order)
                ],
            )
            .await?;
        if inserted > 0 {
            report.pillars_created += 1;
        } else {
            report.pillars_existing += 1;
        }
    }

    for question in catalog.questions() {
        let mut rows = tx
            .query("SELECT id FROM pillars WHERE key = ?1", [question.pillar_key])
            .await?;
        let pillar_id: String = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("pillar", question.pillar_key))?
            .get(0)?;

        tx.execute(
            "INSERT INTO questions (id, pillar_id, text, variant, ord)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET text = excluded.text",
            libsql::params![
                question.id.as_str(),
                pillar_id.as_str(),
                question.text,
                question.variant.as_str(),
                i64::from(question.order)
            ],
        )
        .await?;
        report.questions_written += 1;
    }

    tracing::debug!(questions = report.questions_written, "catalog questions written");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{empty_service, test_service};
    use aim_core::enums::AssessmentVariant;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn seeds_builtin_catalog() {
        let svc = empty_service().await;
        let report = svc.seed_catalog(&Catalog::builtin().unwrap()).await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                pillars_created: 6,
                pillars_existing: 0,
                questions_written: 82,
            }
        );

        let express = svc
            .list_questions(Some(AssessmentVariant::Express), None)
            .await
            .unwrap();
        assert_eq!(express.len(), 20);
    }

    #[tokio::test]
    async fn reseeding_keeps_weights_and_ids() {
        let svc = test_service().await;
        let before = svc.get_pillar("ai_security").await.unwrap();
        svc.set_pillar_weight("ai_security", 2.5).await.unwrap();

        let report = svc.seed_catalog(&Catalog::builtin().unwrap()).await.unwrap();
        assert_eq!(report.pillars_created, 0);
        assert_eq!(report.pillars_existing, 6);

        let after = svc.get_pillar("ai_security").await.unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.weight, 2.5);
    }

    #[tokio::test]
    async fn reseeding_refreshes_question_text() {
        let svc = test_service().await;
        let catalog = Catalog::from_toml_str(
            r#"
[[pillars]]
key = "ai_security"
name = "AI Security"
weight = 1.5
order = 6
express = ["Reworded security question?"]
"#,
        )
        .unwrap();
        svc.seed_catalog(&catalog).await.unwrap();

        let questions = svc
            .list_questions(Some(AssessmentVariant::Express), Some("ai_security"))
            .await
            .unwrap();
        assert_eq!(questions[0].id, "ai_security_express_1");
        assert_eq!(questions[0].text, "Reworded security question?");
        assert_eq!(questions.len(), 4);
    }

    #[tokio::test]
    async fn ensure_catalog_is_a_noop_when_seeded() {
        let svc = test_service().await;
        assert_eq!(svc.ensure_catalog().await.unwrap(), None);
    }
}
