//! Tracker service routes

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    extract::JsonOrForm,
    models::exercise::{AddExerciseRequest, ExerciseResponse, LogQuery},
    models::{CreateUserRequest, UserResponse},
    report::{self, LogParams},
    state::AppState,
    validation,
};

/// Create the router for the tracker service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/exercise/new-user", post(create_user))
        .route("/api/exercise/users", get(get_users))
        .route("/api/exercise/add", post(add_exercise))
        .route("/api/exercise/log", get(get_log))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "tracker"
    }))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let username =
        validation::require_username(payload.username.as_deref()).map_err(ApiError::BadRequest)?;

    let user = state.user_repository.create(&username).await.map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// List all users, projected to `{_id, username}`
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get users: {}", e);
        ApiError::InternalServerError
    })?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(users))
}

/// Log an exercise against a user
pub async fn add_exercise(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<AddExerciseRequest>,
) -> ApiResult<impl IntoResponse> {
    let user_id =
        validation::parse_user_id(payload.user_id.as_deref()).map_err(ApiError::BadRequest)?;
    let description = validation::require_description(payload.description.as_deref())
        .map_err(ApiError::BadRequest)?;
    let duration = validation::require_duration(payload.duration).map_err(ApiError::BadRequest)?;

    // The log endpoint is lenient about malformed dates; this one is not.
    let date = match payload.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => validation::parse_date(raw)
            .ok_or_else(|| ApiError::BadRequest("Invalid date".to_string()))?,
        None => Utc::now(),
    };

    let user = state
        .user_repository
        .find_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let exercise = state
        .exercise_repository
        .create(user.id, &description, duration, date)
        .await
        .map_err(|e| {
            tracing::error!("Failed to log exercise: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ExerciseResponse::new(&exercise, &user)),
    ))
}

/// Get a user's exercise log, date-bounded and count-limited
pub async fn get_log(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> ApiResult<impl IntoResponse> {
    let user_id =
        validation::parse_user_id(query.user_id.as_deref()).map_err(ApiError::BadRequest)?;
    let params = LogParams::from_query(&query);

    let log = report::build_log(&state, user_id, params)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build exercise log: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(log))
}

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}
