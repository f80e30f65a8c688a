//! API models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub mod exercise;

/// Stored user record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Request for user registration (JSON or form body)
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Wire shape for user records
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_uses_mongo_style_id() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(UserResponse::from(user.clone())).unwrap();
        assert_eq!(value["_id"], serde_json::json!(user.id));
        assert!(value.get("created_at").is_none());
    }
}
