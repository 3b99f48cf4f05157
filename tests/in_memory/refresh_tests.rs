//! Tests for how full refreshes interact with local board state.

use taskboard::board::{
    domain::{DragEnd, Lane},
    services::{EditTaskRequest, MoveOutcome},
};

use super::helpers::{Harness, id, ids, seed};

#[tokio::test(flavor = "multi_thread")]
async fn refresh_discards_local_reordering() {
    let harness = Harness::loaded([seed("A", Lane::ToDo), seed("B", Lane::ToDo)]).await;
    harness
        .sync
        .handle_drag_end(&DragEnd::over_task(id("B"), id("A")))
        .await;
    assert_eq!(ids(harness.board.snapshot().tasks()), ["B", "A"]);

    harness
        .mutations
        .refresh()
        .await
        .expect("refresh should succeed");

    assert_eq!(ids(harness.board.snapshot().tasks()), ["A", "B"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_restores_category_after_failed_move() {
    let harness = Harness::loaded([seed("A", Lane::ToDo), seed("C", Lane::Done)]).await;
    harness.store.reject_updates();
    harness
        .sync
        .handle_drag_end(&DragEnd::over_task(id("A"), id("C")))
        .await;
    assert_eq!(harness.board.view(Lane::Done).len(), 2);

    harness
        .mutations
        .refresh()
        .await
        .expect("refresh should succeed");

    assert_eq!(harness.board.view(Lane::ToDo).len(), 1);
    assert_eq!(harness.board.view(Lane::Done).len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_reloads_board_from_store() {
    let harness = Harness::loaded([seed("A", Lane::ToDo), seed("B", Lane::Done)]).await;

    harness
        .mutations
        .edit(EditTaskRequest::new(id("A"), "Renamed", "Done"))
        .await
        .expect("edit should succeed");

    let done: Vec<String> = harness
        .board
        .view(Lane::Done)
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(done, ["Renamed", "Task B"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn gesture_for_task_removed_by_refresh_is_ignored() {
    let harness = Harness::loaded([seed("A", Lane::ToDo), seed("B", Lane::Done)]).await;
    harness
        .mutations
        .delete(&id("A"))
        .await
        .expect("delete should succeed");

    let outcome = harness
        .sync
        .handle_drag_end(&DragEnd::over_task(id("A"), id("B")))
        .await;

    assert!(matches!(outcome, MoveOutcome::Ignored));
    assert!(harness.store.updates().is_empty());
}
