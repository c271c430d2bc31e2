use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::password::hash_password,
    errors::ApiError,
    settings::{
        dto::{SettingsResponse, UpdateSettingsRequest},
        repo,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", put(update_settings))
        .route("/settings/:user_id", get(get_user_settings))
}

#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, ApiError> {
    // Reject before any store call or hashing work.
    if !payload.has_updates() {
        warn!(user_id = %payload.user_id, "settings update with no fields");
        return Err(ApiError::NoFieldsProvided);
    }

    let password_hash = match payload.password.clone() {
        Some(password) => Some(
            tokio::task::spawn_blocking(move || hash_password(&password))
                .await
                .map_err(|e| ApiError::Internal(e.into()))?
                .map_err(ApiError::Internal)?,
        ),
        None => None,
    };

    let staged = repo::stage_fields(&payload, password_hash);
    let settings = repo::update_settings(&state.db, payload.user_id, &staged).await?;

    info!(user_id = %settings.id, fields = staged.len(), "settings updated");
    Ok(Json(SettingsResponse { settings }))
}

#[instrument(skip(state))]
pub async fn get_user_settings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = repo::get_settings(&state.db, user_id).await?;
    Ok(Json(SettingsResponse { settings }))
}
