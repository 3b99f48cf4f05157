//! Command-line driver for a remote task board.
//!
//! Usage:
//!
//! ```text
//! TASKBOARD_STORE_URL=https://tasks.example.com taskboard list
//! taskboard add "Write release notes" --category "In Progress"
//! taskboard move <task-id> --over-lane Done
//! ```
//!
//! Every invocation loads the board from the store first, then dispatches
//! one operation through the board services. Logs go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, eyre};
use taskboard::board::{
    adapters::http::{HttpTaskStore, HttpTaskStoreConfig},
    domain::{DragEnd, DropTarget, Lane, TaskId},
    services::{
        BoardSyncService, CreateTaskRequest, EditTaskRequest, MoveOutcome, SharedBoard,
        TaskMutationService,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "taskboard", about = "Manage tasks on a remote lane board")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every lane and its tasks.
    List,
    /// Create a task.
    Add {
        /// Task title.
        title: String,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
        /// Lane name.
        #[arg(long, default_value = "To-Do")]
        category: String,
    },
    /// Replace a task's title, description and lane.
    Edit {
        /// Task identifier.
        id: String,
        /// New title.
        title: String,
        /// New description; omitted clears it.
        #[arg(long)]
        description: Option<String>,
        /// Lane name.
        #[arg(long, default_value = "To-Do")]
        category: String,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: String,
    },
    /// Drop one task onto another task or onto a lane.
    Move {
        /// Identifier of the dragged task.
        id: String,
        /// Identifier of the task it is dropped onto.
        #[arg(long, conflicts_with = "over_lane")]
        over_task: Option<String>,
        /// Lane it is dropped onto.
        #[arg(long)]
        over_lane: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start async runtime")?;
    runtime.block_on(run(cli.command))
}

async fn run(command: Command) -> Result<()> {
    let config = HttpTaskStoreConfig::from_env().wrap_err("invalid task store configuration")?;
    let store = Arc::new(HttpTaskStore::new(&config)?);
    let board = SharedBoard::default();
    let mutations = TaskMutationService::new(Arc::clone(&store), board.clone());
    let sync = BoardSyncService::new(store, board.clone());

    mutations.refresh().await.wrap_err("failed to load board")?;

    match command {
        Command::List => {}
        Command::Add {
            title,
            description,
            category,
        } => {
            let mut request = CreateTaskRequest::new(title).with_category(category);
            if let Some(text) = description {
                request = request.with_description(text);
            }
            let created = mutations.create(request).await?;
            tracing::info!(task_id = %created.id(), "created");
        }
        Command::Edit {
            id,
            title,
            description,
            category,
        } => {
            let mut request = EditTaskRequest::new(TaskId::new(id)?, title, category);
            if let Some(text) = description {
                request = request.with_description(text);
            }
            mutations.edit(request).await?;
        }
        Command::Delete { id } => mutations.delete(&TaskId::new(id)?).await?,
        Command::Move {
            id,
            over_task,
            over_lane,
        } => {
            let over = match (over_task, over_lane) {
                (Some(task), _) => Some(DropTarget::Task(TaskId::new(task)?)),
                (None, Some(lane)) => Some(DropTarget::Lane(Lane::try_from(lane.as_str())?)),
                (None, None) => None,
            };
            let outcome = sync.handle_drag_end(&DragEnd::new(TaskId::new(id)?, over)).await;
            report_move(&outcome)?;
        }
    }

    print_board(&board)
}

fn report_move(outcome: &MoveOutcome) -> Result<()> {
    match outcome {
        MoveOutcome::Ignored => Err(eyre!("nothing to move")),
        MoveOutcome::Reordered(_) | MoveOutcome::Migrated(_) => Ok(()),
        MoveOutcome::MigrationNotPersisted { error, .. } => {
            Err(eyre!("moved locally but the store rejected the change: {error}"))
        }
    }
}

fn print_board(board: &SharedBoard) -> Result<()> {
    let snapshot = board.snapshot();
    let mut out = io::stdout().lock();
    for (lane, tasks) in snapshot.lanes() {
        writeln!(out, "{lane} ({})", tasks.len())?;
        for task in tasks {
            match task.description() {
                Some(description) => {
                    writeln!(out, "  [{}] {} - {description}", task.id(), task.title())?;
                }
                None => writeln!(out, "  [{}] {}", task.id(), task.title())?,
            }
        }
    }
    Ok(())
}
