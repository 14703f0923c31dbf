//! Telegram delivery — a single sendMessage attempt with a bounded timeout.

use std::time::Duration;

use serde::Deserialize;

use super::RelayOutcome;
use crate::config::TelegramConfig;

/// Telegram Bot API base URL.
const API_BASE: &str = "https://api.telegram.org";

/// Budget for the one outbound sendMessage call.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Pushes formatted notifications to a Telegram chat.
///
/// Fire-and-forget: exactly one attempt per submission, no retry, no
/// backoff, no queueing. A failed delivery loses the submission unless
/// the caller resubmits.
pub struct TelegramNotifier {
    client: reqwest::Client,
    config: TelegramConfig,
    api_base: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            api_base: API_BASE.to_string(),
            timeout: DELIVERY_TIMEOUT,
        }
    }

    /// Override the API base URL (tests point this at a mock server).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Override the delivery timeout (tests).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base, self.config.bot_token)
    }

    /// Send one message to the configured chat.
    ///
    /// Every failure maps onto `RelayOutcome`; nothing escapes as an
    /// error, and the bot token never reaches the logs.
    pub async fn deliver(&self, text: &str) -> RelayOutcome {
        if !self.config.is_configured() {
            tracing::error!("bot credentials not configured; dropping submission");
            return RelayOutcome::Unconfigured;
        }

        let body = serde_json::json!({
            "chat_id": self.config.chat_id,
            "text": text,
            "parse_mode": "HTML",
        });

        let response = match self
            .client
            .post(self.api_url("sendMessage"))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::error!(timeout = ?self.timeout, "Telegram sendMessage timed out");
                return RelayOutcome::TimedOut;
            }
            Err(e) => {
                tracing::error!(error = %e, "Telegram sendMessage transport failure");
                return RelayOutcome::TransportError(e.to_string());
            }
        };

        let status = response.status();
        let parsed: SendMessageResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) if e.is_timeout() => {
                tracing::error!(status = %status, "Telegram response timed out mid-body");
                return RelayOutcome::TimedOut;
            }
            Err(e) => {
                tracing::error!(status = %status, error = %e, "unreadable Telegram response");
                return RelayOutcome::TransportError(e.to_string());
            }
        };

        if !status.is_success() || !parsed.ok {
            let description = parsed
                .description
                .unwrap_or_else(|| "Telegram API error".to_string());
            tracing::warn!(status = %status, description = %description, "Telegram rejected sendMessage");
            return RelayOutcome::UpstreamFailed(description);
        }

        tracing::info!("waitlist notification delivered");
        RelayOutcome::Delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config() -> TelegramConfig {
        TelegramConfig {
            bot_token: "123:ABC".into(),
            chat_id: "-100200300".into(),
        }
    }

    fn notifier(api_base: &str) -> TelegramNotifier {
        TelegramNotifier::new(config()).with_api_base(api_base)
    }

    #[test]
    fn api_url_embeds_token_and_method() {
        let n = TelegramNotifier::new(config());
        assert_eq!(
            n.api_url("sendMessage"),
            "https://api.telegram.org/bot123:ABC/sendMessage"
        );
    }

    #[tokio::test]
    async fn delivers_on_provider_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:ABC/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "chat_id": "-100200300",
                "parse_mode": "HTML",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": {"message_id": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = notifier(&server.uri()).deliver("hello").await;
        assert_eq!(outcome, RelayOutcome::Delivered);
    }

    #[tokio::test]
    async fn sends_message_text_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:ABC/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "text": "📝 <b>New Waitlist Signup!</b>",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let outcome = notifier(&server.uri())
            .deliver("📝 <b>New Waitlist Signup!</b>")
            .await;
        assert_eq!(outcome, RelayOutcome::Delivered);
    }

    #[tokio::test]
    async fn unconfigured_without_token_and_no_network_call() {
        let server = MockServer::start().await;
        // Any request hitting the mock would fail the expectation.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let n = TelegramNotifier::new(TelegramConfig {
            bot_token: String::new(),
            chat_id: "-1".into(),
        })
        .with_api_base(server.uri());

        assert_eq!(n.deliver("hello").await, RelayOutcome::Unconfigured);
        server.verify().await;
    }

    #[tokio::test]
    async fn unconfigured_without_chat_id_and_no_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let n = TelegramNotifier::new(TelegramConfig {
            bot_token: "123:ABC".into(),
            chat_id: String::new(),
        })
        .with_api_base(server.uri());

        assert_eq!(n.deliver("hello").await, RelayOutcome::Unconfigured);
        server.verify().await;
    }

    #[tokio::test]
    async fn upstream_failure_propagates_provider_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": false,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let outcome = notifier(&server.uri()).deliver("hello").await;
        assert_eq!(
            outcome,
            RelayOutcome::UpstreamFailed("Bad Request: chat not found".into())
        );
    }

    #[tokio::test]
    async fn non_2xx_status_is_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "ok": false,
                "description": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let outcome = notifier(&server.uri()).deliver("hello").await;
        assert_eq!(outcome, RelayOutcome::UpstreamFailed("Unauthorized".into()));
    }

    #[tokio::test]
    async fn upstream_failure_without_description_gets_generic_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"ok": false})),
            )
            .mount(&server)
            .await;

        let outcome = notifier(&server.uri()).deliver("hello").await;
        assert_eq!(
            outcome,
            RelayOutcome::UpstreamFailed("Telegram API error".into())
        );
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"ok": true}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let n = notifier(&server.uri()).with_timeout(Duration::from_millis(50));
        assert_eq!(n.deliver("hello").await, RelayOutcome::TimedOut);
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        // Nothing listens on port 1.
        let n = notifier("http://127.0.0.1:1");
        match n.deliver("hello").await {
            RelayOutcome::TransportError(_) => {}
            other => panic!("expected TransportError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        match notifier(&server.uri()).deliver("hello").await {
            RelayOutcome::TransportError(_) => {}
            other => panic!("expected TransportError, got {other:?}"),
        }
    }
}
