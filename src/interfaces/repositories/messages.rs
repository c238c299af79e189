use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::message::{Message, NewMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, msg: &NewMessage) -> Result<Message, AppError>;
    async fn list_messages(&self) -> Result<Vec<Message>, AppError>;
    async fn count_messages(&self) -> Result<i64, AppError>;
    async fn count_unread(&self) -> Result<i64, AppError>;
    async fn mark_read(&self, id: &Uuid) -> Result<Message, AppError>;
}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn create_message(&self, msg: &NewMessage) -> Result<Message, AppError> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender, email, subject, content, read)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING *
            "#
        )
        .bind(&msg.sender)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"SELECT * FROM messages ORDER BY created_at DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn count_messages(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM messages"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_unread(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM messages WHERE read = FALSE"#
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn mark_read(&self, id: &Uuid) -> Result<Message, AppError> {
        // Idempotent: marking an already-read message returns it unchanged.
        let message = sqlx::query_as::<_, Message>(
            r#"UPDATE messages SET read = TRUE WHERE id = $1 RETURNING *"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".into()))?;

        Ok(message)
    }
}
