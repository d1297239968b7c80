//! Chat Transcript
//!
//! The transcript is the ordered message list for the chat page, including
//! the optimistic-send bookkeeping: a user message moves through
//! `sending -> sent` or `sending -> failed`, and at most one `typing`
//! placeholder stands in for the bot reply while a request is in flight.
//!
//! All state transitions are plain methods on [`Transcript`] so the protocol
//! can be tested without a browser; the local-storage snapshot lives in
//! [`restore`] and [`persist`].

use serde::{Deserialize, Serialize};

/// Local storage key holding the serialized transcript
pub const STORAGE_KEY: &str = "fb_chat_demo";

/// Display label attributed to replies that carry no `source` of their own
pub const DEFAULT_SOURCE: &str = "AI • Model v1";

/// Author of a transcript message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Bot,
}

/// Delivery state of a user-authored message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Sending,
    Sent,
    Failed,
}

/// A single transcript entry
///
/// `id` doubles as the creation timestamp (milliseconds); the chat page
/// derives the bubble time-of-day label from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub role: Role,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SendStatus>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub typing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Message {
    pub fn system(id: i64, text: &str) -> Self {
        Self {
            id,
            role: Role::System,
            text: text.to_string(),
            status: None,
            typing: false,
            source: None,
        }
    }

    pub fn user(id: i64, text: &str) -> Self {
        Self {
            id,
            role: Role::User,
            text: text.to_string(),
            status: Some(SendStatus::Sending),
            typing: false,
            source: None,
        }
    }

    pub fn bot(id: i64, text: &str, source: Option<&str>) -> Self {
        Self {
            id,
            role: Role::Bot,
            text: text.to_string(),
            status: None,
            typing: false,
            source: source.map(str::to_string),
        }
    }

    /// Transient placeholder shown while a reply is in flight
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            role: Role::Bot,
            text: String::new(),
            status: None,
            typing: true,
            source: None,
        }
    }
}

/// Ordered message sequence for the session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    /// Fixed transcript used when no snapshot exists yet
    pub fn seed() -> Self {
        Self(vec![
            Message::system(1, "AI • Model v1 ready"),
            Message {
                status: None,
                ..Message::user(2, "Hi, can you summarize our growth?")
            },
            Message::bot(
                3,
                "Over the last 30 days, users grew 4.2% with stable sessions.",
                None,
            ),
        ])
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of typing placeholders currently present (invariant: <= 1)
    pub fn typing_count(&self) -> usize {
        self.0.iter().filter(|m| m.typing).count()
    }

    /// Append the optimistic user message and the typing placeholder.
    ///
    /// The caller guards on trimmed non-empty input and on the in-flight
    /// flag before calling this.
    pub fn begin_send(&mut self, user_id: i64, placeholder_id: i64, text: &str) {
        self.0.push(Message::user(user_id, text));
        self.0.push(Message::placeholder(placeholder_id));
    }

    /// Reconcile a successful reply: user message -> sent, placeholder
    /// removed, bot reply appended.
    pub fn settle_ok(&mut self, user_id: i64, reply_id: i64, reply: &str, source: Option<&str>) {
        self.mark(user_id, SendStatus::Sent);
        self.0.retain(|m| !m.typing);
        self.0
            .push(Message::bot(reply_id, reply, source.or(Some(DEFAULT_SOURCE))));
    }

    /// Reconcile a failed send: user message -> failed, placeholder removed.
    pub fn settle_err(&mut self, user_id: i64) {
        self.mark(user_id, SendStatus::Failed);
        self.0.retain(|m| !m.typing);
    }

    fn mark(&mut self, user_id: i64, status: SendStatus) {
        if let Some(msg) = self.0.iter_mut().find(|m| m.id == user_id) {
            msg.status = Some(status);
        }
    }
}

/// Read the stored transcript, falling back to the seed when the entry is
/// missing or no longer parses.
pub fn restore() -> Transcript {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());

    match stored.as_deref().map(serde_json::from_str::<Transcript>) {
        Some(Ok(transcript)) => transcript,
        _ => Transcript::seed(),
    }
}

/// Overwrite the stored snapshot with the full transcript.
pub fn persist(transcript: &Transcript) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(json) = serde_json::to_string(transcript) {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_messages() {
        let t = Transcript::seed();
        assert_eq!(t.len(), 3);
        assert_eq!(t.messages()[0].role, Role::System);
        assert_eq!(t.messages()[1].role, Role::User);
        assert_eq!(t.messages()[2].role, Role::Bot);
        assert_eq!(t.typing_count(), 0);
    }

    #[test]
    fn begin_send_appends_user_and_placeholder() {
        let mut t = Transcript::seed();
        t.begin_send(100, 101, "Hi, can you summarize our growth?");

        assert_eq!(t.len(), 5);
        assert_eq!(t.typing_count(), 1);

        let user = &t.messages()[3];
        assert_eq!(user.role, Role::User);
        assert_eq!(user.status, Some(SendStatus::Sending));
        assert_eq!(user.text, "Hi, can you summarize our growth?");

        assert!(t.messages()[4].typing);
        assert!(t.messages()[4].text.is_empty());
    }

    #[test]
    fn successful_send_settles_to_sent_reply() {
        let mut t = Transcript::seed();
        t.begin_send(100, 101, "Hi, can you summarize our growth?");
        t.settle_ok(100, 102, "Growth is steady.", None);

        // placeholder gone, net zero typing messages
        assert_eq!(t.typing_count(), 0);

        let tail = &t.messages()[t.len() - 2..];
        assert_eq!(tail[0].role, Role::User);
        assert_eq!(tail[0].status, Some(SendStatus::Sent));
        assert_eq!(tail[0].text, "Hi, can you summarize our growth?");
        assert_eq!(tail[1].role, Role::Bot);
        assert_eq!(tail[1].text, "Growth is steady.");
        assert_eq!(tail[1].source.as_deref(), Some(DEFAULT_SOURCE));
    }

    #[test]
    fn reply_source_wins_over_default() {
        let mut t = Transcript::default();
        t.begin_send(1, 2, "hello");
        t.settle_ok(1, 3, "hi", Some("AI • Model v2"));
        assert_eq!(
            t.messages().last().unwrap().source.as_deref(),
            Some("AI • Model v2")
        );
    }

    #[test]
    fn failed_send_marks_user_and_drops_placeholder() {
        let mut t = Transcript::seed();
        t.begin_send(100, 101, "Hi, can you summarize our growth?");
        t.settle_err(100);

        assert_eq!(t.typing_count(), 0);

        let last = t.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.status, Some(SendStatus::Failed));

        // no trailing bot message on the failure path
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn settle_never_reverts_earlier_messages() {
        let mut t = Transcript::default();
        t.begin_send(1, 2, "first");
        t.settle_ok(1, 3, "ok", None);
        t.begin_send(10, 11, "second");
        t.settle_err(10);

        let first = t.messages().iter().find(|m| m.id == 1).unwrap();
        assert_eq!(first.status, Some(SendStatus::Sent));
    }

    #[test]
    fn snapshot_round_trips_exactly() {
        let mut t = Transcript::seed();
        t.begin_send(100, 101, "one");
        t.settle_ok(100, 102, "reply one", None);
        t.begin_send(200, 201, "two");
        t.settle_err(200);

        let json = serde_json::to_string(&t).unwrap();
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn snapshot_matches_stored_shape() {
        // stored entries written by earlier versions of the app omit
        // status/typing/source entirely
        let json = r#"[{"id":1,"role":"system","text":"AI • Model v1 ready"},
                       {"id":2,"role":"user","text":"hello"},
                       {"id":3,"role":"bot","text":"hi","source":"AI • Model v1"}]"#;
        let t: Transcript = serde_json::from_str(json).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.typing_count(), 0);
        assert_eq!(t.messages()[2].source.as_deref(), Some("AI • Model v1"));
    }

    #[test]
    fn malformed_snapshot_fails_to_parse() {
        // restore() maps this case to the seed transcript
        assert!(serde_json::from_str::<Transcript>("{not json").is_err());
        assert!(serde_json::from_str::<Transcript>(r#"{"messages":[]}"#).is_err());
    }
}
