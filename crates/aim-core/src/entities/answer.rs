use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recorded answer, unique per (assessment, question).
///
/// When `not_applicable` is set the stored score is always 0 and the answer is
/// excluded from pillar means.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub id: String,
    pub assessment_id: String,
    pub question_id: String,
    /// 0 = absent practice … 4 = optimized.
    pub score: u8,
    pub not_applicable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming answer as sent by the submission surface.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: String,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub not_applicable: bool,
}

impl AnswerSubmission {
    /// Score as it will be stored: forced to 0 when not applicable.
    #[must_use]
    pub const fn effective_score(&self) -> u8 {
        if self.not_applicable { 0 } else { self.score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_defaults_from_camel_case() {
        let sub: AnswerSubmission =
            serde_json::from_str(r#"{"questionId": "ai_security_express_1", "score": 3}"#).unwrap();
        assert_eq!(sub.question_id, "ai_security_express_1");
        assert_eq!(sub.score, 3);
        assert!(!sub.not_applicable);
    }

    #[test]
    fn not_applicable_forces_zero() {
        let sub = AnswerSubmission {
            question_id: "q".into(),
            score: 4,
            not_applicable: true,
        };
        assert_eq!(sub.effective_score(), 0);
    }
}
