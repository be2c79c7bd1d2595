use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum; the wire labels are the
/// human-readable ones the client displays ("Pending", "In Progress",
/// "Completed").
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    /// Task has not been started yet. The default for new tasks.
    #[sqlx(rename = "Pending")]
    Pending,
    /// Task is currently being worked on.
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    /// Task is done.
    #[sqlx(rename = "Completed")]
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// Input structure for creating or fully overwriting a task.
///
/// `title`, `description` and `dueDate` are required; `status` may be
/// omitted and falls back to `Pending`. Update uses the same payload as
/// create: the four mutable fields are overwritten as a whole, there is no
/// partial merge.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Must be between 1 and 1000 characters.
    #[validate(length(min = 1, max = 1000))]
    pub description: String,

    pub status: Option<TaskStatus>,

    /// Calendar date the task is due, e.g. `"2025-06-01"`.
    pub due_date: NaiveDate,
}

/// A task row as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (UUID v4), assigned at creation.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    /// The user who created the task; immutable, and the only identity
    /// allowed to read, modify or delete it.
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a new `Task` from input and the creator's id, with a fresh
    /// UUID, status defaulted to `Pending` and both timestamps set to now.
    pub fn new(input: TaskInput, owner_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or_default(),
            due_date: input.due_date,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}
