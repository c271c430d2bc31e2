use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::with_timeout;
use crate::errors::ApiError;
use crate::settings::dto::UpdateSettingsRequest;

/// Settings projection returned to the client. The password hash is never
/// part of this row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSettings {
    pub id: Uuid,
    pub language: Option<String>,
    pub theme: Option<String>,
    pub email: String,
    pub name: Option<String>,
}

/// Stage the (column, value) assignments for a partial update, in a fixed
/// order. The statement text and the bind sequence are both derived from
/// this one list, so placeholder numbering cannot drift from the values.
pub fn stage_fields(
    req: &UpdateSettingsRequest,
    password_hash: Option<String>,
) -> Vec<(&'static str, String)> {
    let mut staged = Vec::new();
    if let Some(v) = &req.language {
        staged.push(("language", v.clone()));
    }
    if let Some(v) = &req.theme {
        staged.push(("theme", v.clone()));
    }
    if let Some(v) = &req.email {
        staged.push(("email", v.clone()));
    }
    if let Some(v) = &req.name {
        staged.push(("name", v.clone()));
    }
    if let Some(h) = password_hash {
        staged.push(("password_hash", h));
    }
    staged
}

fn build_update_sql(staged: &[(&'static str, String)]) -> String {
    let assignments = staged
        .iter()
        .enumerate()
        .map(|(i, (col, _))| format!("{} = ${}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE users SET {}, updated_at = NOW() WHERE id = ${} \
         RETURNING id, language, theme, email, name",
        assignments,
        staged.len() + 1
    )
}

/// Apply the staged assignments to one user row. The caller guarantees
/// `staged` is non-empty.
pub async fn update_settings(
    db: &PgPool,
    user_id: Uuid,
    staged: &[(&'static str, String)],
) -> Result<UserSettings, ApiError> {
    let sql = build_update_sql(staged);
    let mut query = sqlx::query_as::<_, UserSettings>(&sql);
    for (_, value) in staged {
        query = query.bind(value);
    }
    query = query.bind(user_id);

    with_timeout(query.fetch_optional(db))
        .await?
        .ok_or(ApiError::UserNotFound)
}

pub async fn get_settings(db: &PgPool, user_id: Uuid) -> Result<UserSettings, ApiError> {
    with_timeout(
        sqlx::query_as::<_, UserSettings>(
            r#"
            SELECT id, language, theme, email, name
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db),
    )
    .await?
    .ok_or(ApiError::UserNotFound)
}
