use std::sync::Arc;

use game_core::{QueryParams, ScoreRecord, SortKey};
use runtime::{
    FileScoreRepository, InMemoryScoreRepository, Leaderboard, RuntimeError, ScoreRepository,
};
use serde_json::json;

async fn seeded(repository: Arc<dyn ScoreRepository>) -> Leaderboard {
    let leaderboard = Leaderboard::new(repository);
    for submission in [
        json!({"name": "A", "high_score": 10, "date": "2021-01-03"}),
        json!({"name": "B", "high_score": 30, "date": "2021-01-01"}),
        json!({"name": "A", "high_score": 20, "date": "2021-01-02"}),
    ] {
        leaderboard.submit(&submission).await.unwrap();
    }
    leaderboard
}

#[tokio::test]
async fn test_query_scenario_against_memory_store() {
    let leaderboard = seeded(Arc::new(InMemoryScoreRepository::new())).await;

    let params = QueryParams::from_raw(Some("high_score"), Some("A"), Some("1")).unwrap();
    let result = leaderboard.scores(&params).await.unwrap();

    assert_eq!(result, vec![ScoreRecord::new("A", 20, "2021-01-02")]);
}

#[tokio::test]
async fn test_default_read_is_descending_by_score() {
    let leaderboard = seeded(Arc::new(InMemoryScoreRepository::new())).await;

    let result = leaderboard.scores(&QueryParams::new()).await.unwrap();

    let scores: Vec<f64> = result.iter().map(ScoreRecord::score).collect();
    assert_eq!(scores, vec![30.0, 20.0, 10.0]);
}

#[tokio::test]
async fn test_rejected_submission_writes_nothing() {
    let repository = Arc::new(InMemoryScoreRepository::new());
    let leaderboard = Leaderboard::new(repository.clone());

    let err = leaderboard
        .submit(&json!({"name": "Al", "high_score": "100", "date": "2021-01-01"}))
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Validation(_)));
    assert!(!err.is_retryable());
    assert_eq!(repository.len().unwrap(), 0);

    let accepted = leaderboard
        .submit(&json!({"name": "Al", "high_score": 100, "date": "2021-01-01"}))
        .await
        .unwrap();
    assert_eq!(accepted, ScoreRecord::new("Al", 100, "2021-01-01"));
    assert_eq!(repository.len().unwrap(), 1);
}

#[tokio::test]
async fn test_limit_edges() {
    let leaderboard = seeded(Arc::new(InMemoryScoreRepository::new())).await;

    let negative = QueryParams::from_raw(None, None, Some("-5")).unwrap();
    assert!(leaderboard.scores(&negative).await.unwrap().is_empty());

    let oversized = QueryParams::from_raw(None, Some("A"), Some("50")).unwrap();
    assert_eq!(leaderboard.scores(&oversized).await.unwrap().len(), 2);

    let garbage = QueryParams::from_raw(None, None, Some("lots")).unwrap();
    assert!(leaderboard.scores(&garbage).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_sort_key_is_invalid_query() {
    let err: RuntimeError = QueryParams::from_raw(Some("score"), None, None)
        .unwrap_err()
        .into();
    assert!(matches!(err, RuntimeError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.jsonl");

    seeded(Arc::new(FileScoreRepository::new(&path).unwrap())).await;

    let reopened = Leaderboard::new(Arc::new(FileScoreRepository::new(&path).unwrap()));
    let by_name = reopened
        .scores(&QueryParams::new().with_sort(SortKey::Name))
        .await
        .unwrap();

    let order: Vec<(&str, f64)> = by_name
        .iter()
        .map(|record| (record.name.as_str(), record.score()))
        .collect();
    assert_eq!(order, vec![("A", 20.0), ("A", 10.0), ("B", 30.0)]);
}

#[tokio::test]
async fn test_concurrent_submissions_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(FileScoreRepository::new(dir.path().join("scores.jsonl")).unwrap());
    let leaderboard = Leaderboard::new(repository);

    let mut tasks = Vec::new();
    for i in 0..20 {
        let leaderboard = leaderboard.clone();
        tasks.push(tokio::spawn(async move {
            leaderboard
                .submit(&json!({"name": format!("p{i}"), "high_score": i, "date": "2021-01-01"}))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let all = leaderboard.scores(&QueryParams::new()).await.unwrap();
    assert_eq!(all.len(), 20);
    assert_eq!(all[0].name, "p19");
}
