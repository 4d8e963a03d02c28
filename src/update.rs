use serde::Deserialize;

/// Inbound Telegram update, reduced to the fields this bot acts on.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

/// A chat message carried by an update
#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    #[serde(default)]
    pub text: String,
    pub reply_to_message: Option<Box<Message>>,
    pub left_chat_member: Option<User>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

impl Update {
    /// True when the update is a message in a group or supergroup
    pub fn is_group_chat(&self) -> bool {
        matches!(
            self.message.as_ref().map(|message| message.chat.kind),
            Some(ChatKind::Group) | Some(ChatKind::Supergroup)
        )
    }

    /// True when the update is a message in a one-on-one chat
    pub fn is_private_chat(&self) -> bool {
        matches!(
            self.message.as_ref().map(|message| message.chat.kind),
            Some(ChatKind::Private)
        )
    }

    /// True when the message text starts with the command marker
    pub fn is_command(&self) -> bool {
        self.message
            .as_ref()
            .is_some_and(|message| message.text.starts_with('/'))
    }

    /// True when the update reports a member leaving the chat
    pub fn is_member_departure(&self) -> bool {
        self.message
            .as_ref()
            .is_some_and(|message| message.left_chat_member.is_some())
    }
}

/// Normalize the command token of a message: take the leading
/// whitespace-delimited word, strip a trailing `@botname` mention and
/// lower-case it, so `/GetBirthday@somebot` becomes `/getbirthday`.
pub fn extract_command(text: &str) -> String {
    let token = text.split_whitespace().next().unwrap_or(text);
    let command = token.split('@').next().unwrap_or(token);
    command.to_lowercase()
}
