use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::todos::create_todo::{CreateTodo, CreateTodoError};
use crate::application::use_cases::todos::delete_todo::DeleteTodo;
use crate::application::use_cases::todos::get_todo::GetTodo;
use crate::application::use_cases::todos::list_todos::ListTodos;
use crate::application::use_cases::todos::update_todo::{
    UpdateTodo, UpdateTodoError, UpdateTodoRequest as UpdateTodoDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::todos::todo as domain;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Serialize, ToSchema)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<i64>,
    #[serde(rename = "_creator")]
    pub creator: Uuid,
}

impl From<domain::Todo> for Todo {
    fn from(t: domain::Todo) -> Self {
        Self {
            id: t.id,
            text: t.text,
            completed: t.completed,
            completed_at: t.completed_at,
            creator: t.creator_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
    // Anything but a literal `true` marks the todo incomplete
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub completed: Option<serde_json::Value>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/:id",
            get(get_todo).delete(delete_todo).patch(update_todo),
        )
        .with_state(ctx)
}

// Malformed ids look exactly like missing todos
fn parse_todo_id(raw: &str) -> Result<Uuid, StatusCode> {
    Uuid::parse_str(raw).map_err(|_| StatusCode::NOT_FOUND)
}

fn store_failure(e: anyhow::Error) -> StatusCode {
    tracing::error!(error = ?e, "todo store operation failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[utoipa::path(post, path = "/todos", tag = "Todos", request_body = CreateTodoRequest,
    params(("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200, body = Todo), (status = 400, description = "Missing or empty text")))]
pub async fn create_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<Json<Todo>, StatusCode> {
    let repo = ctx.todo_repo();
    let uc = CreateTodo {
        repo: repo.as_ref(),
    };
    let todo = uc
        .execute(auth.user.id, req.text.as_deref())
        .await
        .map_err(|e| match e {
            CreateTodoError::EmptyText => StatusCode::BAD_REQUEST,
            CreateTodoError::Store(err) => store_failure(err),
        })?;
    Ok(Json(todo.into()))
}

#[utoipa::path(get, path = "/todos", tag = "Todos",
    params(("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200, body = TodoListResponse)))]
pub async fn list_todos(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<TodoListResponse>, StatusCode> {
    let repo = ctx.todo_repo();
    let uc = ListTodos {
        repo: repo.as_ref(),
    };
    let todos = uc.execute(auth.user.id).await.map_err(store_failure)?;
    Ok(Json(TodoListResponse {
        todos: todos.into_iter().map(Todo::from).collect(),
    }))
}

#[utoipa::path(get, path = "/todos/{id}", tag = "Todos",
    params(("id" = String, Path, description = "Todo ID"), ("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200, body = TodoResponse), (status = 404)))]
pub async fn get_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let id = parse_todo_id(&id)?;
    let repo = ctx.todo_repo();
    let uc = GetTodo {
        repo: repo.as_ref(),
    };
    let todo = uc
        .execute(id, auth.user.id)
        .await
        .map_err(store_failure)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(TodoResponse { todo: todo.into() }))
}

#[utoipa::path(delete, path = "/todos/{id}", tag = "Todos",
    params(("id" = String, Path, description = "Todo ID"), ("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200, body = TodoResponse), (status = 404)))]
pub async fn delete_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let id = parse_todo_id(&id)?;
    let repo = ctx.todo_repo();
    let uc = DeleteTodo {
        repo: repo.as_ref(),
    };
    let todo = uc
        .execute(id, auth.user.id)
        .await
        .map_err(store_failure)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(TodoResponse { todo: todo.into() }))
}

#[utoipa::path(patch, path = "/todos/{id}", tag = "Todos", request_body = UpdateTodoRequest,
    params(("id" = String, Path, description = "Todo ID"), ("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200, body = TodoResponse), (status = 400, description = "Empty text"), (status = 404)))]
pub async fn update_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let id = parse_todo_id(&id)?;
    let repo = ctx.todo_repo();
    let uc = UpdateTodo {
        repo: repo.as_ref(),
    };
    let dto = UpdateTodoDto {
        text: req.text,
        completed: matches!(req.completed, Some(serde_json::Value::Bool(true))),
    };
    let todo = uc
        .execute(id, auth.user.id, &dto)
        .await
        .map_err(|e| match e {
            UpdateTodoError::EmptyText => StatusCode::BAD_REQUEST,
            UpdateTodoError::Store(err) => store_failure(err),
        })?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(TodoResponse { todo: todo.into() }))
}
