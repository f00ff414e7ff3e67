use crate::api::CompletionClient;
use crate::markdown::{Segment, prose_to_html, split_message};
use crate::state::ChatState;
use crate::types::{ChatMessage, ContentPart, MODELS, MessageContent, Role};
use crate::views::code_block::CodeBlock;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "GPT",
    }
}

#[component]
pub fn ChatView() -> Element {
    let mut state = use_signal(ChatState::default);
    let client = use_signal(CompletionClient::from_env);

    // Overlapping sends are allowed: each spawned task appends its reply
    // whenever its response arrives, with no ordering between them.
    let mut send_message = move || {
        let Some(turn) = state.with_mut(|chat| chat.begin_send()) else {
            return;
        };
        let client = client();
        spawn(async move {
            match client.complete(turn.model, turn.message).await {
                Ok(reply) => state.with_mut(|chat| chat.accept_reply(reply)),
                Err(err) => {
                    tracing::error!(error = %err, "completion request failed");
                    state.with_mut(|chat| chat.reject_reply());
                }
            }
        });
    };

    let snapshot = state();

    rsx! {
        div { class: "main-container",
            div { class: "model-select",
                label { "Select Model:" }
                select {
                    value: "{snapshot.model.id}",
                    onchange: move |ev| state.with_mut(|chat| chat.select_model(&ev.value())),
                    for model in MODELS {
                        option {
                            value: model.id,
                            selected: snapshot.model.id == model.id,
                            "{model.display_name}"
                        }
                    }
                }
            }

            div { id: "chat-list", class: "chat-list",
                for message in snapshot.messages.iter() {
                    MessageRow { message: message.clone() }
                }
            }

            if let Some(preview) = snapshot.pending_image.clone() {
                div { class: "image-preview",
                    strong { "Image Preview:" }
                    img { src: "{preview}", alt: "preview" }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "Type your message...",
                        value: "{snapshot.draft}",
                        oninput: move |ev| state.with_mut(|chat| chat.set_draft(ev.value())),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_message();
                            }
                        },
                        autofocus: true,
                    }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |ev| {
                            if let Some(file_engine) = ev.files() {
                                spawn(async move {
                                    if let Some(name) = file_engine.files().first().cloned()
                                        && let Some(bytes) = file_engine.read_file(&name).await
                                    {
                                        state.with_mut(|chat| chat.attach_image(&bytes, &name));
                                    }
                                });
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| send_message(),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    rsx! {
        div { class: format_args!("message-row {}", role_class(message.role)),
            div { class: format_args!("bubble {}", role_class(message.role)),
                strong { class: "role-label", "{role_label(message.role)}:" }
                MessageBody { content: message.content.clone() }
            }
            if let Some(ts) = format_message_timestamp(message.created_at) {
                div { class: "message-meta",
                    span { class: "message-timestamp", "{ts}" }
                }
            }
        }
    }
}

#[component]
fn MessageBody(content: MessageContent) -> Element {
    match content {
        MessageContent::Text(text) => rsx! {
            MarkdownBody { text }
        },
        MessageContent::Parts(parts) => rsx! {
            for part in parts.into_iter() {
                MessagePart { part }
            }
        },
    }
}

#[component]
fn MessagePart(part: ContentPart) -> Element {
    match part {
        ContentPart::Text { text } => rsx! {
            MarkdownBody { text }
        },
        ContentPart::ImageUrl { image_url } => rsx! {
            img { class: "bubble-image", src: "{image_url.url}", alt: "attachment" }
        },
    }
}

#[component]
fn MarkdownBody(text: String) -> Element {
    let segments = split_message(&text);
    rsx! {
        div { class: "md",
            for segment in segments.into_iter() {
                MarkdownSegment { segment }
            }
        }
    }
}

#[component]
fn MarkdownSegment(segment: Segment) -> Element {
    match segment {
        Segment::Prose(md) => {
            let html = prose_to_html(&md);
            rsx! {
                div { class: "prose", dangerous_inner_html: "{html}" }
            }
        }
        Segment::Code { language, code } => rsx! {
            CodeBlock { language, code }
        },
    }
}
