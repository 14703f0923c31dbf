//! Configuration types.

/// Credentials for the outbound Telegram Bot API.
///
/// Read once at process start and shared read-only across all requests.
/// Missing variables leave the fields empty; `is_configured` gates
/// delivery at request time so the server can still start and answer
/// with a configuration error instead of crashing.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    /// Build from the `BOT_TOKEN` / `CHAT_ID` environment variables.
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var("BOT_TOKEN").unwrap_or_default(),
            chat_id: std::env::var("CHAT_ID").unwrap_or_default(),
        }
    }

    /// Whether both credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.bot_token.trim().is_empty() && !self.chat_id.trim().is_empty()
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
