//! Message Bubble Component
//!
//! Renders one transcript entry: user bubbles on the right, bot and system
//! bubbles on the left, a shimmer placeholder for typing messages, and a
//! tap-to-retry marker on failed sends.

use leptos::*;

use crate::components::loading::ShimmerLine;
use crate::state::chat::{Message, Role, SendStatus, DEFAULT_SOURCE};

/// One chat transcript bubble
#[component]
pub fn MessageBubble(
    message: Message,
    /// Called with the message text when a failed bubble is tapped
    #[prop(into)]
    on_retry: Callback<String>,
) -> impl IntoView {
    if message.typing {
        return view! {
            <div class="bubble-row bubble-left">
                <div class="avatar" />
                <div class="bubble bubble-bot">
                    <ShimmerLine />
                </div>
            </div>
        }
        .into_view();
    }

    let is_user = message.role == Role::User;
    let failed = message.status == Some(SendStatus::Failed);

    let author = if is_user {
        "You".to_string()
    } else {
        message
            .source
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string())
    };
    let time = chrono::DateTime::from_timestamp_millis(message.id)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default();

    let row_class = if is_user {
        "bubble-row bubble-right"
    } else {
        "bubble-row bubble-left"
    };
    let bubble_class = if is_user { "bubble bubble-user" } else { "bubble bubble-bot" };

    let retry_text = message.text.clone();

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <div class="bubble-meta">{format!("{} • {}", author, time)}</div>
                <div class="bubble-text">{message.text}</div>
                {failed
                    .then(|| {
                        view! {
                            <button
                                class="bubble-failed"
                                on:click=move |_| on_retry.call(retry_text.clone())
                            >
                                "Failed to send. Tap to retry."
                            </button>
                        }
                    })}
            </div>
        </div>
    }
    .into_view()
}
