//! Tests for API-facing models and helpers

use std::future::Future;
use std::time::Duration;

use lockrun::core::{Spawn, TaskDetail, TaskEngine, TaskOutput, TaskState};
use lockrun::runtime::{
    get_task, health, list_tasks, submit_task, task_detail, task_output, TaskSubmission,
};
use serde_json::json;

#[derive(Clone)]
struct TestSpawner;

impl Spawn for TestSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(fut);
    }
}

async fn settle(engine: &TaskEngine<TestSpawner>) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !engine.list().iter().all(|t| t.state().is_terminal()) {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("tasks did not settle");
}

#[test]
fn test_submission_round_trips_through_json() {
    let req = TaskSubmission {
        name: "Add packages to repo foo".into(),
        resource_keys: vec!["repo:foo".into()],
    };

    let encoded = serde_json::to_string(&req).unwrap();
    let decoded: TaskSubmission = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.name, req.name);
    assert_eq!(decoded.resource_keys, req.resource_keys);
}

#[tokio::test]
async fn test_submit_and_snapshot() {
    let engine = TaskEngine::new(TestSpawner);

    let req = TaskSubmission {
        name: "Delete repo foo".into(),
        resource_keys: vec!["repo:foo".into()],
    };
    let snapshot = submit_task(&engine, req, |out: TaskOutput, detail: TaskDetail| async move {
        out.print("dropping");
        detail.store(json!({"dropped": true}));
        Ok(())
    })
    .unwrap();

    assert_eq!(snapshot.name, "Delete repo foo");
    assert_eq!(snapshot.state, TaskState::Running);

    settle(&engine).await;

    let after = get_task(&engine, snapshot.id).unwrap();
    assert_eq!(after.state, TaskState::Succeeded);
    assert!(task_output(&engine, snapshot.id).unwrap().contains("dropping"));
    assert_eq!(task_detail(&engine, snapshot.id).unwrap()["dropped"], true);
}

#[tokio::test]
async fn test_conflicting_submission_reports_error() {
    let engine = TaskEngine::new(TestSpawner);
    let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

    let req = TaskSubmission {
        name: "long import".into(),
        resource_keys: vec!["repo:foo".into()],
    };
    submit_task(&engine, req, move |_out, _detail| async move {
        let _ = release_rx.await;
        Ok(())
    })
    .unwrap();

    let conflicting = TaskSubmission {
        name: "second import".into(),
        resource_keys: vec!["repo:foo".into()],
    };
    let err = submit_task(&engine, conflicting, |_out, _detail| async move {
        Ok(())
    })
    .unwrap_err();
    assert!(err.to_string().contains("repo:foo"));
    assert_eq!(list_tasks(&engine).len(), 1);

    release_tx.send(()).unwrap();
    settle(&engine).await;
}

#[tokio::test]
async fn test_missing_task_lookups() {
    let engine = TaskEngine::new(TestSpawner);
    assert!(get_task(&engine, 99).is_none());
    assert!(task_output(&engine, 99).is_none());
    assert!(task_detail(&engine, 99).is_none());
    assert!(list_tasks(&engine).is_empty());
}

#[test]
fn test_health() {
    assert!(health().ok);
}

#[test]
fn test_state_serializes_symbolically() {
    assert_eq!(serde_json::to_string(&TaskState::Running).unwrap(), "\"Running\"");
    let state: TaskState = serde_json::from_str("\"Failed\"").unwrap();
    assert_eq!(state, TaskState::Failed);
}
