use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::message::{Message, MessageListResponse, NewMessage},
    errors::AppError,
    repositories::messages::MessageRepository,
};

pub struct MessageHandler<R>
where
    R: MessageRepository,
{
    pub message_repo: R,
}

impl<R> MessageHandler<R>
where
    R: MessageRepository,
{
    pub fn new(message_repo: R) -> Self {
        MessageHandler { message_repo }
    }

    /// Stores a contact-form submission; new messages are always unread.
    pub async fn create_message(&self, request: NewMessage) -> Result<Message, AppError> {
        request.validate()?;

        self.message_repo.create_message(&request).await
    }

    /// Lists all messages newest first with total/unread counts.
    pub async fn list_messages(&self) -> Result<MessageListResponse, AppError> {
        let messages = self.message_repo.list_messages().await?;
        let total = self.message_repo.count_messages().await?;
        let unread = self.message_repo.count_unread().await?;

        Ok(MessageListResponse {
            messages,
            total,
            unread,
        })
    }

    /// Marks a message read. Idempotent.
    pub async fn mark_read(&self, id: &Uuid) -> Result<Message, AppError> {
        self.message_repo.mark_read(id).await
    }
}
