use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NewMessage {
    #[validate(length(min = 2, max = 100, message = "Sender must be 2-100 characters"))]
    pub sender: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(max = 150, message = "Subject must be at most 150 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 5, max = 5000, message = "Content must be 5-5000 characters"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub sender: String,
    pub email: String,
    pub subject: Option<String>,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
    pub total: i64,
    pub unread: i64,
}
