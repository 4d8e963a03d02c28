/// Ports consumed by the bot core. The Postgres repository and the
/// Telegram client implement these; tests substitute in-memory fakes.
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::BotError;
use crate::models::Birthday;

/// Durable storage of birthday records, keyed by (chat, user) and by
/// calendar position.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Insert or overwrite the record for (chat_id, user_id)
    async fn save(&self, birthday: Birthday) -> Result<(), BotError>;

    /// Stored date for one user in one chat; `None` when never set
    async fn get_date(&self, chat_id: i64, user_id: i64) -> Result<Option<NaiveDate>, BotError>;

    /// All records in a chat sharing the smallest adjusted day-of-year
    /// strictly greater than `ordinal_floor`; empty when none remain
    async fn get_upcoming(&self, chat_id: i64, ordinal_floor: u32)
    -> Result<Vec<Birthday>, BotError>;

    /// All records across every chat whose adjusted day-of-year matches
    /// the given date's
    async fn get_by_calendar_date(&self, date: NaiveDate) -> Result<Vec<Birthday>, BotError>;

    async fn delete(&self, chat_id: i64, user_id: i64) -> Result<(), BotError>;

    async fn delete_all_for_chat(&self, chat_id: i64) -> Result<(), BotError>;

    async fn delete_all_for_user(&self, user_id: i64) -> Result<(), BotError>;
}

/// Outbound chat messaging
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError>;

    async fn send_reply(&self, chat_id: i64, message_id: i64, text: &str)
    -> Result<(), BotError>;

    async fn send_reaction(
        &self,
        chat_id: i64,
        message_id: i64,
        reaction: &str,
    ) -> Result<(), BotError>;
}
