//! The intake relay core: validate → format → deliver.

pub mod deliver;
pub mod format;
pub mod validate;

pub use deliver::{DELIVERY_TIMEOUT, TelegramNotifier};
pub use format::format_notification;
pub use validate::{SubmissionRequest, ValidatedSubmission, validate};

use std::time::Duration;

use chrono::Utc;

use crate::config::TelegramConfig;
use crate::error::ValidationError;

/// Result of one relay attempt, consumed by the hosting adapters.
///
/// Produced once per request and mapped straight to an HTTP response;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Telegram accepted the message.
    Delivered,
    /// The submission failed validation; nothing was sent.
    Rejected(ValidationError),
    /// Bot credentials are missing; nothing was sent.
    Unconfigured,
    /// Telegram rejected the message (provider description attached).
    UpstreamFailed(String),
    /// The delivery call exceeded its timeout budget.
    TimedOut,
    /// A network-layer fault (DNS, refused connection, unreadable body).
    TransportError(String),
}

/// Stateless submission pipeline around a configured notifier.
///
/// Shared read-only across concurrent requests; each request runs the
/// pipeline independently.
pub struct Relay {
    notifier: TelegramNotifier,
}

impl Relay {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            notifier: TelegramNotifier::new(config),
        }
    }

    /// Point the notifier at a different API base URL (tests).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.notifier = self.notifier.with_api_base(base);
        self
    }

    /// Shrink the delivery timeout (tests).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.notifier = self.notifier.with_timeout(timeout);
        self
    }

    /// Run one raw submission through validate → format → deliver.
    ///
    /// Validation failures short-circuit before any network attempt. The
    /// submission timestamp is read here so the formatter stays pure.
    pub async fn process(&self, raw: SubmissionRequest) -> RelayOutcome {
        let submission = match validate(&raw) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "submission rejected");
                return RelayOutcome::Rejected(e);
            }
        };

        let text = format_notification(&submission, Utc::now());
        self.notifier.deliver(&text).await
    }
}
