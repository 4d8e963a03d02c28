use thiserror::Error;

type Source = Box<dyn std::error::Error + Send + Sync>;

/// Failures a single action can surface.
///
/// Nothing here is fatal to the process: date-format errors turn into a
/// help reply, collaborator failures turn into a canned reply (or a log
/// line for membership events) at the action boundary.
#[derive(Debug, Error)]
pub enum BotError {
    /// The user-supplied date text could not be parsed
    #[error("invalid date format")]
    InvalidDateFormat,

    /// The storage collaborator failed
    #[error("persistence failure: {0}")]
    Persistence(#[source] Source),

    /// The chat transport failed to deliver a message or reaction
    #[error("transport failure: {0}")]
    Transport(#[source] Source),
}

impl BotError {
    pub fn persistence(source: impl Into<Source>) -> Self {
        Self::Persistence(source.into())
    }

    pub fn transport(source: impl Into<Source>) -> Self {
        Self::Transport(source.into())
    }
}
