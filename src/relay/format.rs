//! Notification formatting.

use chrono::{DateTime, Utc};

use super::validate::ValidatedSubmission;

/// Render the Telegram notification for one submission.
///
/// Pure and deterministic: the submission timestamp is supplied by the
/// caller, never read from the ambient clock. Field values are
/// HTML-escaped independently; the template markup itself is not.
pub fn format_notification(
    submission: &ValidatedSubmission,
    submitted_at: DateTime<Utc>,
) -> String {
    format!(
        "📝 <b>New Waitlist Signup!</b>\n\n\
         👤 <b>Name:</b> {}\n\
         📧 <b>Email:</b> {}\n\
         📞 <b>Phone:</b> {}\n\n\
         ⏰ <b>Submitted:</b> {}",
        escape_html(submission.name()),
        escape_html(submission.email()),
        escape_html(submission.phone()),
        submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Escape the metacharacters Telegram's HTML parse mode interprets.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
