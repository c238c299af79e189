use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_cms::entities::message::{Message, NewMessage};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::messages::MessageRepository;
use portfolio_cms::use_cases::messages::MessageHandler;

mock! {
    pub MessageRepo {}

    #[async_trait::async_trait]
    impl MessageRepository for MessageRepo {
        async fn create_message(&self, msg: &NewMessage) -> Result<Message, AppError>;
        async fn list_messages(&self) -> Result<Vec<Message>, AppError>;
        async fn count_messages(&self) -> Result<i64, AppError>;
        async fn count_unread(&self) -> Result<i64, AppError>;
        async fn mark_read(&self, id: &Uuid) -> Result<Message, AppError>;
    }
}

fn stored_message(msg: &NewMessage) -> Message {
    Message {
        id: Uuid::new_v4(),
        sender: msg.sender.clone(),
        email: msg.email.clone(),
        subject: msg.subject.clone(),
        content: msg.content.clone(),
        read: false,
        created_at: Utc::now(),
    }
}

fn new_message() -> NewMessage {
    NewMessage {
        sender: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        subject: Some("Collaboration".into()),
        content: "I'd like to talk about your analytics engine.".into(),
    }
}

#[tokio::test]
async fn create_stores_message_as_unread() {
    let mut repo = MockMessageRepo::new();

    repo.expect_create_message()
        .withf(|msg: &NewMessage| msg.sender == "Ada Lovelace")
        .returning(|msg| Ok(stored_message(msg)));

    let handler = MessageHandler::new(repo);
    let message = handler.create_message(new_message()).await.unwrap();

    assert!(!message.read);
    assert_eq!(message.sender, "Ada Lovelace");
    assert_eq!(message.subject.as_deref(), Some("Collaboration"));
}

#[tokio::test]
async fn create_rejects_invalid_email_without_storing() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message().never();

    let mut request = new_message();
    request.email = "not-an-address".into();

    let handler = MessageHandler::new(repo);
    let result = handler.create_message(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn mark_read_twice_returns_the_same_message() {
    let id = Uuid::new_v4();
    let mut read_message = stored_message(&new_message());
    read_message.id = id;
    read_message.read = true;

    let mut repo = MockMessageRepo::new();
    repo.expect_mark_read()
        .with(eq(id))
        .times(2)
        .returning(move |_| Ok(read_message.clone()));

    let handler = MessageHandler::new(repo);
    let once = handler.mark_read(&id).await.unwrap();
    let twice = handler.mark_read(&id).await.unwrap();

    assert!(once.read);
    assert!(twice.read);
    // A second mark-read changes nothing.
    assert_eq!(once.id, twice.id);
    assert_eq!(once.created_at, twice.created_at);
}

#[tokio::test]
async fn mark_read_of_unknown_message_is_not_found() {
    let id = Uuid::new_v4();

    let mut repo = MockMessageRepo::new();
    repo.expect_mark_read()
        .with(eq(id))
        .returning(|_| Err(AppError::NotFound("Message not found".into())));

    let handler = MessageHandler::new(repo);
    let result = handler.mark_read(&id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn list_reports_total_and_unread_counts() {
    let read = {
        let mut m = stored_message(&new_message());
        m.read = true;
        m
    };
    let unread = stored_message(&new_message());

    let mut repo = MockMessageRepo::new();
    let messages = vec![unread, read];
    repo.expect_list_messages()
        .returning(move || Ok(messages.clone()));
    repo.expect_count_messages().returning(|| Ok(2));
    repo.expect_count_unread().returning(|| Ok(1));

    let handler = MessageHandler::new(repo);
    let response = handler.list_messages().await.unwrap();

    assert_eq!(response.messages.len(), 2);
    assert_eq!(response.total, 2);
    assert_eq!(response.unread, 1);
}
