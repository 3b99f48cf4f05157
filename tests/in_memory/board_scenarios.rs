//! End-to-end board scenarios over the in-memory store.

use taskboard::board::{
    domain::{DragEnd, Lane, Task, TaskCategory},
    ports::{TaskPatch, TaskStore, TaskStoreError},
    services::{CreateTaskRequest, MoveOutcome, TaskMutationError},
};

use super::helpers::{Harness, id, ids, seed};

#[tokio::test(flavor = "multi_thread")]
async fn moving_task_onto_other_lane_persists_category() {
    let harness = Harness::loaded([
        seed("A", Lane::ToDo),
        seed("B", Lane::ToDo),
        seed("C", Lane::Done),
    ])
    .await;

    let outcome = harness
        .sync
        .handle_drag_end(&DragEnd::over_task(id("A"), id("C")))
        .await;

    assert!(matches!(outcome, MoveOutcome::Migrated(_)));
    let board = harness.board.snapshot();
    assert_eq!(board.position(&id("A")), Some(2));
    assert_eq!(
        board.get(&id("A")).map(Task::category),
        Some(&TaskCategory::Known(Lane::Done))
    );
    assert_eq!(
        harness.store.updates(),
        vec![(id("A"), TaskPatch::category(Lane::Done))]
    );

    let stored = harness.store.list_tasks().await.expect("list should succeed");
    let stored_a = stored
        .iter()
        .find(|task| task.id() == &id("A"))
        .expect("A should be stored");
    assert_eq!(stored_a.category(), &TaskCategory::Known(Lane::Done));
}

#[tokio::test(flavor = "multi_thread")]
async fn reordering_within_lane_stays_local() {
    let harness = Harness::loaded([seed("A", Lane::ToDo), seed("B", Lane::ToDo)]).await;

    let outcome = harness
        .sync
        .handle_drag_end(&DragEnd::over_task(id("B"), id("A")))
        .await;

    assert!(matches!(outcome, MoveOutcome::Reordered(_)));
    let board = harness.board.snapshot();
    assert_eq!(ids(board.tasks()), ["B", "A"]);
    assert!(
        board
            .tasks()
            .iter()
            .all(|task| task.category() == &TaskCategory::Known(Lane::ToDo))
    );
    assert!(harness.store.updates().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn creating_task_with_empty_title_is_rejected_locally() {
    let harness = Harness::loaded([seed("A", Lane::ToDo)]).await;
    let before = harness.board.snapshot();

    let result = harness.mutations.create(CreateTaskRequest::new("")).await;

    assert!(matches!(result, Err(TaskMutationError::Validation(_))));
    assert_eq!(harness.board.snapshot(), before);
    let stored = harness.store.list_tasks().await.expect("list should succeed");
    assert_eq!(stored.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_category_update_keeps_moved_task() {
    let harness = Harness::loaded([
        seed("A", Lane::ToDo),
        seed("B", Lane::ToDo),
        seed("C", Lane::Done),
    ])
    .await;
    harness.store.reject_updates();

    let outcome = harness
        .sync
        .handle_drag_end(&DragEnd::over_task(id("A"), id("C")))
        .await;

    assert!(matches!(
        outcome,
        MoveOutcome::MigrationNotPersisted {
            error: TaskStoreError::Rejected { status: 500, .. },
            ..
        }
    ));
    let board = harness.board.snapshot();
    assert_eq!(ids(board.tasks()), ["B", "C", "A"]);
    assert_eq!(
        board.get(&id("A")).map(Task::category),
        Some(&TaskCategory::Known(Lane::Done))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_unknown_task_reports_remote_failure() {
    let harness = Harness::loaded([seed("A", Lane::ToDo)]).await;
    let before = harness.board.snapshot();

    let result = harness.mutations.delete(&id("nope")).await;

    assert!(matches!(
        result,
        Err(TaskMutationError::Remote(TaskStoreError::NotFound(_)))
    ));
    assert_eq!(harness.board.snapshot(), before);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_from_absent_to_absent() {
    let harness = Harness::loaded([]).await;

    let created = harness
        .mutations
        .create(CreateTaskRequest::new("Write changelog").with_category("In Progress"))
        .await
        .expect("create should succeed");
    assert_eq!(harness.board.view(Lane::InProgress).len(), 1);

    harness
        .sync
        .handle_drag_end(&DragEnd::over_lane(created.id().clone(), Lane::Done))
        .await;
    assert_eq!(harness.board.view(Lane::Done).len(), 1);

    harness
        .mutations
        .delete(created.id())
        .await
        .expect("delete should succeed");
    assert!(harness.board.snapshot().is_empty());
}
