use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo::User;

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_shape() {
        let response = AuthResponse {
            token: "signed.jwt.token".into(),
            user: PublicUser {
                id: Uuid::new_v4(),
                username: "ana".into(),
                email: "a@x.com".into(),
                created_at: OffsetDateTime::now_utc(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "signed.jwt.token");
        assert_eq!(json["user"]["email"], "a@x.com");
        assert!(json["user"].get("password_hash").is_none());
    }

    #[test]
    fn public_user_drops_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "ana".into(),
            email: "a@x.com".into(),
            password_hash: "hash".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let public = PublicUser::from(user);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("password"));
    }
}
