//! Answer repository: validated submission and reads.

use chrono::{DateTime, Utc};

use aim_core::entities::{Answer, AnswerSubmission, Assessment};
use aim_core::enums::AssessmentStatus;
use aim_core::ids::PREFIX_ANSWER;
use aim_core::responses::SubmissionSummary;
use aim_scoring::ScoredAnswer;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_unsigned, parse_datetime};
use crate::service::AimService;

/// Highest score on the answer scale.
pub const MAX_SCORE: u8 = 4;

const ANSWER_COLS: &str =
    "id, assessment_id, question_id, score, not_applicable, created_at, updated_at";

fn row_to_answer(row: &libsql::Row) -> Result<Answer, DatabaseError> {
    Ok(Answer {
        id: row.get(0)?,
        assessment_id: row.get(1)?,
        question_id: row.get(2)?,
        score: get_unsigned(row, 3)?,
        not_applicable: get_bool(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl AimService {
    /// Record answers for an assessment, replacing earlier answers to the
    /// same questions.
    ///
    /// Every answer is checked before anything is written: the score must be
    /// 0..=4 (ignored and stored as 0 when not applicable) and the question
    /// must belong to the assessment's variant. The first answer moves a DRAFT
    /// assessment to IN_PROGRESS; a COMPLETED one stays COMPLETED until it is
    /// recalculated. An empty submission changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown assessment,
    /// `DatabaseError::Validation` for a bad answer. Nothing is written then.
    pub async fn submit_answers(
        &self,
        assessment_id: &str,
        answers: &[AnswerSubmission],
    ) -> Result<SubmissionSummary, DatabaseError> {
        let assessment = self.get_assessment(assessment_id).await?;
        if answers.is_empty() {
            return Ok(SubmissionSummary {
                assessment_id: assessment.id,
                saved: 0,
                status: assessment.status,
            });
        }

        for answer in answers {
            self.validate_answer(&assessment, answer).await?;
        }

        let mut ids = Vec::with_capacity(answers.len());
        for _ in answers {
            ids.push(self.db().generate_id(PREFIX_ANSWER).await?);
        }

        let status = assessment.status.after_answers();
        let now = Utc::now();

        let tx = self.db().conn().transaction().await?;
        let written = write_answers(&tx, &assessment.id, answers, &ids, status, now).await;
        let saved = match written {
            Ok(saved) => {
                tx.commit().await?;
                saved
            }
            Err(e) => return Err(crate::abort(tx, "submit_answers", e).await),
        };

        tracing::debug!(
            assessment = %assessment.id,
            saved,
            from = %assessment.status,
            to = %status,
            "answers recorded"
        );

        Ok(SubmissionSummary {
            assessment_id: assessment.id,
            saved,
            status,
        })
    }

    async fn validate_answer(
        &self,
        assessment: &Assessment,
        answer: &AnswerSubmission,
    ) -> Result<(), DatabaseError> {
        if !answer.not_applicable && answer.score > MAX_SCORE {
            return Err(DatabaseError::Validation(format!(
                "score for '{}' must be between 0 and {MAX_SCORE} (got {})",
                answer.question_id, answer.score
            )));
        }

        let question = match self.get_question(&answer.question_id).await {
            Ok(q) => q,
            Err(DatabaseError::NotFound { .. }) => {
                return Err(DatabaseError::Validation(format!(
                    "unknown question '{}'",
                    answer.question_id
                )));
            }
            Err(e) => return Err(e),
        };

        if question.variant != assessment.variant {
            return Err(DatabaseError::Validation(format!(
                "question '{}' belongs to the {} questionnaire, assessment {} is {}",
                question.id, question.variant, assessment.id, assessment.variant
            )));
        }
        Ok(())
    }

    /// Stored answers of an assessment, in question order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown assessment.
    pub async fn list_answers(&self, assessment_id: &str) -> Result<Vec<Answer>, DatabaseError> {
        self.get_assessment(assessment_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT a.id, a.assessment_id, a.question_id, a.score, a.not_applicable,
                        a.created_at, a.updated_at
                 FROM answers a
                 JOIN questions q ON q.id = a.question_id
                 JOIN pillars p ON p.id = q.pillar_id
                 WHERE a.assessment_id = ?1
                 ORDER BY p.ord, q.ord",
                [assessment_id],
            )
            .await?;

        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_answer(&row)?);
        }
        Ok(answers)
    }

    /// Answers reduced to what the scoring engine reads.
    pub(crate) async fn load_scored_answers(
        &self,
        assessment_id: &str,
    ) -> Result<Vec<ScoredAnswer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT q.pillar_id, a.score, a.not_applicable
                 FROM answers a JOIN questions q ON q.id = a.question_id
                 WHERE a.assessment_id = ?1",
                [assessment_id],
            )
            .await?;

        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(ScoredAnswer {
                pillar_id: row.get(0)?,
                score: get_unsigned(&row, 1)?,
                not_applicable: get_bool(&row, 2)?,
            });
        }
        Ok(answers)
    }
}

async fn write_answers(
    tx: &libsql::Transaction,
    assessment_id: &str,
    answers: &[AnswerSubmission],
    ids: &[String],
    status: AssessmentStatus,
    now: DateTime<Utc>,
) -> Result<u32, DatabaseError> {
    let mut saved = 0u32;
    for (answer, id) in answers.iter().zip(ids) {
        tx.execute(
            &format!(
                "INSERT INTO answers ({ANSWER_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
                 ON CONFLICT(assessment_id, question_id) DO UPDATE SET
                     score = excluded.score,
                     not_applicable = excluded.not_applicable,
                     updated_at = excluded.updated_at"
            ),
            libsql::params![
                id.as_str(),
                assessment_id,
                answer.question_id.as_str(),
                i64::from(answer.effective_score()),
                i64::from(answer.not_applicable),
                now.to_rfc3339()
            ],
        )
        .await?;
        saved += 1;
    }

    tx.execute(
        "UPDATE assessments SET status = ?1, updated_at = ?2 WHERE id = ?3",
        libsql::params![status.as_str(), now.to_rfc3339(), assessment_id],
    )
    .await?;
    Ok(saved)
}
