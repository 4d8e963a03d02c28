use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::error;

use crate::calendar::BirthdayCalendar;
use crate::constants::{
    COMMAND_CLEAR, COMMAND_CLEAR_FULL, COMMAND_GET_BIRTHDAY, COMMAND_HELP, COMMAND_MY_BIRTHDAY,
    COMMAND_NEXT_BIRTHDAY, COMMAND_PRIVACY, COMMAND_SET_BIRTHDAY, COMMAND_SOURCE, COMMAND_START,
    COMMAND_UNSET_BIRTHDAY, REACTION_THUMBS_UP,
};
use crate::error::BotError;
use crate::messages;
use crate::models::{Birthday, BirthdayPerson};
use crate::ports::{ChatTransport, Repository};
use crate::update::{Message, Update, User, extract_command};
use crate::utils::dates::{format_date_for_display, parse_birthday_input};
use crate::utils::formatter::{next_birthday_message, person_name};

/// Routes classified updates to birthday actions and composes replies.
///
/// Collaborator failures never reach the chat as raw errors: mutating
/// and reading actions degrade to a canned failure reply, membership
/// cleanup fails silently with a log line. The bot's own identity is
/// injected so it can recognize itself as subject or departing member.
pub struct BirthdayManager {
    repository: Arc<dyn Repository>,
    transport: Arc<dyn ChatTransport>,
    calendar: BirthdayCalendar,
    bot_id: i64,
}

impl BirthdayManager {
    pub fn new(
        repository: Arc<dyn Repository>,
        transport: Arc<dyn ChatTransport>,
        bot_id: i64,
    ) -> Self {
        let calendar = BirthdayCalendar::new(Arc::clone(&repository));
        Self {
            repository,
            transport,
            calendar,
            bot_id,
        }
    }

    /// Entry point for one inbound update
    pub async fn handle_update(&self, update: &Update) -> Result<(), BotError> {
        let Some(message) = update.message.as_ref() else {
            return Ok(());
        };
        if update.is_group_chat() {
            if update.is_command() {
                return self.handle_group_command(message).await;
            }
            if update.is_member_departure() {
                return self.handle_member_departure(message).await;
            }
        } else if update.is_private_chat() {
            if update.is_command() {
                return self.handle_private_command(message).await;
            }
            return self
                .transport
                .send_message(message.chat.id, messages::SHORT_HELP)
                .await;
        }
        Ok(())
    }

    /// Birthday people for one calendar date, across all chats. Used by
    /// the scheduled notification scan; errors propagate to the caller.
    pub async fn birthdays_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<BirthdayPerson>, BotError> {
        let records = self.calendar.records_for_date(date).await?;
        Ok(records
            .iter()
            .map(|record| BirthdayPerson {
                chat_id: record.chat_id,
                user_id: record.user_id,
                name: person_name(record),
            })
            .collect())
    }

    async fn handle_group_command(&self, message: &Message) -> Result<(), BotError> {
        match extract_command(&message.text).as_str() {
            COMMAND_SET_BIRTHDAY => self.save_birthday(message).await,
            COMMAND_UNSET_BIRTHDAY => self.delete_birthday(message).await,
            COMMAND_GET_BIRTHDAY | COMMAND_MY_BIRTHDAY => self.get_birthday(message).await,
            COMMAND_NEXT_BIRTHDAY => self.get_next_birthday(message).await,
            // Unknown group commands are not for us; stay silent
            _ => Ok(()),
        }
    }

    async fn handle_private_command(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        match extract_command(&message.text).as_str() {
            COMMAND_HELP | COMMAND_START => {
                self.transport.send_message(chat_id, messages::FULL_HELP).await
            }
            COMMAND_PRIVACY => self.transport.send_message(chat_id, messages::PRIVACY).await,
            COMMAND_SOURCE => self.transport.send_message(chat_id, messages::SOURCE).await,
            COMMAND_CLEAR => self.clear_all_user_data(message).await,
            COMMAND_SET_BIRTHDAY | COMMAND_UNSET_BIRTHDAY | COMMAND_GET_BIRTHDAY
            | COMMAND_NEXT_BIRTHDAY => {
                self.transport
                    .send_message(chat_id, messages::GROUP_COMMAND_ONLY)
                    .await
            }
            _ => self.transport.send_message(chat_id, messages::SHORT_HELP).await,
        }
    }

    async fn save_birthday(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let message_id = message.message_id;
        let Some(from) = message.from.as_ref() else {
            return Ok(());
        };

        let parts: Vec<&str> = message.text.split_whitespace().collect();
        if parts.len() < 2 {
            return self
                .transport
                .send_reply(chat_id, message_id, messages::WRONG_FORMAT)
                .await;
        }
        let Ok(date) = parse_birthday_input(&parts[1..]) else {
            return self
                .transport
                .send_reply(chat_id, message_id, messages::WRONG_FORMAT)
                .await;
        };

        let birthday = Birthday {
            chat_id,
            user_id: from.id,
            date,
            username: from.username.clone(),
            first_name: from.first_name.clone(),
            last_name: from.last_name.clone(),
        };
        if let Err(err) = self.repository.save(birthday).await {
            error!("could not save birthday ({date}) for chat {chat_id}: {err}");
            return self
                .transport
                .send_reply(chat_id, message_id, messages::SAVE_FAILURE)
                .await;
        }

        self.transport
            .send_reaction(chat_id, message_id, REACTION_THUMBS_UP)
            .await
    }

    async fn delete_birthday(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let message_id = message.message_id;
        let Some(from) = message.from.as_ref() else {
            return Ok(());
        };

        if let Err(err) = self.repository.delete(chat_id, from.id).await {
            error!("could not delete birthday for chat {chat_id}, user {}: {err}", from.id);
            return self
                .transport
                .send_reply(chat_id, message_id, messages::UNSET_FAILURE)
                .await;
        }

        self.transport
            .send_reaction(chat_id, message_id, REACTION_THUMBS_UP)
            .await
    }

    async fn get_birthday(&self, message: &Message) -> Result<(), BotError> {
        match message
            .reply_to_message
            .as_ref()
            .and_then(|replied| replied.from.as_ref())
        {
            Some(subject) => self.get_someones_birthday(message, subject).await,
            None => self.get_own_birthday(message).await,
        }
    }

    async fn get_own_birthday(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let message_id = message.message_id;
        let Some(from) = message.from.as_ref() else {
            return Ok(());
        };

        let text = match self.calendar.stored_date(chat_id, from.id).await {
            Ok(Some(date)) => messages::own_birthday(&format_date_for_display(date)),
            Ok(None) => messages::NO_OWN_BIRTHDAY_SET.to_string(),
            Err(err) => {
                error!("could not get birthday for chat {chat_id}, user {}: {err}", from.id);
                messages::GET_FAILURE.to_string()
            }
        };
        self.transport.send_reply(chat_id, message_id, &text).await
    }

    async fn get_someones_birthday(
        &self,
        message: &Message,
        subject: &User,
    ) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let message_id = message.message_id;

        if subject.id == self.bot_id {
            return self
                .transport
                .send_reply(chat_id, message_id, messages::BOT_BIRTHDAY)
                .await;
        }

        let text = match self.calendar.stored_date(chat_id, subject.id).await {
            Ok(Some(date)) => messages::someones_birthday(&format_date_for_display(date)),
            Ok(None) => messages::NO_BIRTHDAY_SET.to_string(),
            Err(err) => {
                error!(
                    "could not get birthday for chat {chat_id}, user {}: {err}",
                    subject.id
                );
                messages::GET_FAILURE.to_string()
            }
        };
        self.transport.send_reply(chat_id, message_id, &text).await
    }

    async fn get_next_birthday(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let message_id = message.message_id;

        let text = match self.calendar.upcoming(chat_id, Utc::now().date_naive()).await {
            Ok(birthdays) if birthdays.is_empty() => messages::NO_BIRTHDAYS.to_string(),
            Ok(birthdays) => next_birthday_message(&birthdays),
            Err(err) => {
                error!("could not get next birthday for chat {chat_id}: {err}");
                messages::GET_FAILURE.to_string()
            }
        };
        self.transport.send_reply(chat_id, message_id, &text).await
    }

    /// Membership cleanup is silent: no reply ever, failures only logged
    async fn handle_member_departure(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let Some(member) = message.left_chat_member.as_ref() else {
            return Ok(());
        };

        let result = if member.id == self.bot_id {
            self.repository.delete_all_for_chat(chat_id).await
        } else {
            self.repository.delete(chat_id, member.id).await
        };
        if let Err(err) = result {
            error!("could not clean up birthdays after departure in chat {chat_id}: {err}");
        }
        Ok(())
    }

    async fn clear_all_user_data(&self, message: &Message) -> Result<(), BotError> {
        let chat_id = message.chat.id;
        let Some(from) = message.from.as_ref() else {
            return Ok(());
        };

        // Destructive and irreversible, so the exact phrase is required
        if message.text != COMMAND_CLEAR_FULL {
            return self
                .transport
                .send_message(chat_id, messages::CLEAR_INSTRUCTIONS)
                .await;
        }

        if let Err(err) = self.repository.delete_all_for_user(from.id).await {
            error!("could not clear data for user {}: {err}", from.id);
            return self
                .transport
                .send_message(chat_id, messages::UNSET_FAILURE)
                .await;
        }
        self.transport
            .send_message(chat_id, messages::DATA_CLEARED)
            .await
    }
}
