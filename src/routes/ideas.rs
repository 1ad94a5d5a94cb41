use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::Idea,
    routes::AppState,
};

/// Looks up one catalog activity by id
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Idea>> {
    state
        .catalog
        .get(&id)
        .map(|activity| Json(Idea::from(activity)))
        .ok_or_else(|| AppError::NotFound(format!("idea {}", id)))
}
