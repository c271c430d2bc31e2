use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::settings::repo::UserSettings;

/// Partial update: every field other than `user_id` is independently optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub user_id: Uuid,
    pub language: Option<String>,
    pub theme: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UpdateSettingsRequest {
    pub fn has_updates(&self) -> bool {
        self.language.is_some()
            || self.theme.is_some()
            || self.email.is_some()
            || self.name.is_some()
            || self.password.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: UserSettings,
}
