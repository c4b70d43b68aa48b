//! File-backed database: state survives reopening.

use aim_core::entities::AnswerSubmission;
use aim_core::enums::{AssessmentStatus, AssessmentVariant};
use aim_db::service::AimService;
use pretty_assertions::assert_eq;

fn answer(question_id: &str, score: u8) -> AnswerSubmission {
    AnswerSubmission {
        question_id: question_id.to_string(),
        score,
        not_applicable: false,
    }
}

#[tokio::test]
async fn scores_and_weights_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aim.db");
    let path = path.to_str().unwrap();

    let (assessment_id, result) = {
        let svc = AimService::new_local(path, true).await.unwrap();
        svc.set_pillar_weight("agents_integrations", 2.0).await.unwrap();
        let asm = svc
            .create_assessment("acme", AssessmentVariant::Express, Some("auditor"))
            .await
            .unwrap();
        svc.submit_answers(
            &asm.id,
            &[
                answer("agents_integrations_express_1", 4),
                answer("agents_integrations_express_2", 2),
            ],
        )
        .await
        .unwrap();
        let result = svc.calculate(&asm.id).await.unwrap();
        (asm.id, result)
    };

    let svc = AimService::new_local(path, true).await.unwrap();
    let pillar = svc.get_pillar("agents_integrations").await.unwrap();
    assert_eq!(pillar.weight, 2.0);

    let stored = svc.get_assessment(&assessment_id).await.unwrap();
    assert_eq!(stored.status, AssessmentStatus::Completed);
    assert_eq!(stored.overall_score, Some(result.overall_score));
    assert_eq!(stored.risk_level, Some(result.risk_level));

    let scores = svc.get_pillar_scores(&assessment_id).await.unwrap();
    assert_eq!(scores.len(), 6);
    let agents = scores
        .iter()
        .find(|s| s.pillar_key == "agents_integrations")
        .unwrap();
    assert_eq!(agents.score.score, 3.0);

    // Same inputs, same snapshot
    let again = svc.calculate(&assessment_id).await.unwrap();
    assert_eq!(again, result);
}

#[tokio::test]
async fn reopening_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aim.db");
    let path = path.to_str().unwrap();

    let first_ids: Vec<String> = {
        let svc = AimService::new_local(path, true).await.unwrap();
        svc.list_pillars().await.unwrap().into_iter().map(|p| p.id).collect()
    };

    let svc = AimService::new_local(path, true).await.unwrap();
    assert_eq!(svc.ensure_catalog().await.unwrap(), None);
    let second_ids: Vec<String> = svc.list_pillars().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn unseeded_database_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bare.db");
    let svc = AimService::new_local(path.to_str().unwrap(), false).await.unwrap();
    assert!(svc.list_pillars().await.unwrap().is_empty());

    let asm = svc
        .create_assessment("acme", AssessmentVariant::Express, None)
        .await
        .unwrap();
    let result = svc.calculate(&asm.id).await.unwrap();
    assert!(result.pillar_scores.is_empty());
    assert_eq!(result.overall_score, 0.0);
}
