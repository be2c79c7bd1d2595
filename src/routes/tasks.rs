use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Task, TaskInput},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const TASK_COLUMNS: &str = "id, title, description, status, due_date, owner_id, created_at, updated_at";

/// Creates a new task owned by the caller.
///
/// Status defaults to Pending when omitted. Responds 201 with the stored
/// row.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = Task::new(task_data.into_inner(), caller.0);

    let task = sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (id, title, description, status, due_date, owner_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(task.id)
    .bind(task.title)
    .bind(task.description)
    .bind(task.status)
    .bind(task.due_date)
    .bind(task.owner_id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Task created successfully",
        "task": task
    })))
}

/// Lists every task owned by the caller, in the store's natural order.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = sqlx::query_as::<_, Task>(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE owner_id = $1"
    ))
    .bind(caller.0)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "tasks": tasks
    })))
}

/// Fetches one task by id.
///
/// The query filters by owner as well as id, so a task that exists but
/// belongs to someone else is indistinguishable from one that does not
/// exist.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = sqlx::query_as::<_, Task>(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1 AND owner_id = $2"
    ))
    .bind(task_id.into_inner())
    .bind(caller.0)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "task": task
    })))
}

/// Overwrites a task's title, description, status and due date.
///
/// Full-document semantics: the payload is the same as create, and an
/// omitted status resets to Pending. Same not-found/ownership behavior as
/// `get_task`; `updated_at` is advanced by the store's trigger.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let input = task_data.into_inner();

    let task = sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET title = $1, description = $2, status = $3, due_date = $4
         WHERE id = $5 AND owner_id = $6
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.status.unwrap_or_default())
    .bind(input.due_date)
    .bind(task_id.into_inner())
    .bind(caller.0)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task updated successfully",
        "task": task
    })))
}

/// Deletes a task and returns its last snapshot.
///
/// Same not-found/ownership behavior as `get_task`; deleting an
/// already-deleted id is 404.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = sqlx::query_as::<_, Task>(&format!(
        "DELETE FROM tasks WHERE id = $1 AND owner_id = $2
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(task_id.into_inner())
    .bind(caller.0)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully",
        "task": task
    })))
}
