use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::error::BotError;
use crate::ports::ChatTransport;

const API_BASE_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client for the Telegram Bot API, implementing the outbound
/// chat transport. Send failures are logged here and surfaced as
/// transport errors; they are never retried.
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

/// Envelope every Bot API method responds with
#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

/// The bot's own identity, as reported by `getMe`
#[derive(Debug, Deserialize)]
pub struct BotProfile {
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: format!("{API_BASE_URL}/bot{token}"),
        }
    }

    /// Fetch the bot's own profile
    pub async fn get_me(&self) -> Result<BotProfile, BotError> {
        let profile: BotProfile = self.call("getMe", json!({})).await?;
        info!("Fetched bot profile: @{} ({})", profile.username, profile.id);
        Ok(profile)
    }

    /// Point Telegram's webhook at the given public URL
    pub async fn set_webhook(&self, url: &str) -> Result<(), BotError> {
        self.call::<Value>("setWebhook", json!({ "url": url }))
            .await?;
        Ok(())
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, BotError> {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(&params)
            .send()
            .await
            .map_err(BotError::transport)?;
        let body: ApiResponse<T> = response.json().await.map_err(BotError::transport)?;
        if !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(BotError::transport(format!("{method} failed: {description}")));
        }
        body.result
            .ok_or_else(|| BotError::transport(format!("{method} response carried no result")))
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        self.call::<Value>(
            "sendMessage",
            json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }),
        )
        .await
        .inspect_err(|err| error!("failed to send message to chat {chat_id}: {err}"))
        .map(|_| ())
    }

    async fn send_reply(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
    ) -> Result<(), BotError> {
        self.call::<Value>(
            "sendMessage",
            json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
                "reply_parameters": {
                    "chat_id": chat_id,
                    "message_id": message_id,
                },
            }),
        )
        .await
        .inspect_err(|err| {
            error!("failed to reply to message {message_id} in chat {chat_id}: {err}")
        })
        .map(|_| ())
    }

    async fn send_reaction(
        &self,
        chat_id: i64,
        message_id: i64,
        reaction: &str,
    ) -> Result<(), BotError> {
        self.call::<Value>(
            "setMessageReaction",
            json!({
                "chat_id": chat_id,
                "message_id": message_id,
                "reaction": [{ "type": "emoji", "emoji": reaction }],
            }),
        )
        .await
        .inspect_err(|err| {
            error!("failed to react to message {message_id} in chat {chat_id}: {err}")
        })
        .map(|_| ())
    }
}
