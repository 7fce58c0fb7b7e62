use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_MEMBER: &str = "MEMBER";
pub const ROLE_STAFF: &str = "STAFF";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            role: ROLE_MEMBER.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn is_staff(&self) -> bool {
        self.role == ROLE_STAFF
    }
}
