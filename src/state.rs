use crate::api::ERROR_REPLY;
use crate::types::{
    ChatMessage, ContentPart, ImageSource, MessageContent, ModelInfo, Role, default_model,
    model_by_id,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use time::OffsetDateTime;

/// Everything `begin_send` needs to hand to the network task: the target
/// model id and the single message the backend sees this turn.
#[derive(Clone, Debug, PartialEq)]
pub struct UserTurn {
    pub model: &'static str,
    pub message: ChatMessage,
}

/// The whole mutable state of the application, owned by the chat view and
/// mutated only through the commands below.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    pub model: &'static ModelInfo,
    pub pending_image: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            model: default_model(),
            pending_image: None,
        }
    }
}

impl ChatState {
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Ignores ids not present in the model table.
    pub fn select_model(&mut self, id: &str) {
        if let Some(model) = model_by_id(id) {
            self.model = model;
        }
    }

    /// Encodes raw file bytes as a data URI and stores them as the pending
    /// attachment. No size or type validation; empty input is a no-op.
    pub fn attach_image(&mut self, bytes: &[u8], file_name: &str) {
        if bytes.is_empty() {
            return;
        }
        let mime = mime_for_file(file_name);
        self.pending_image = Some(format!("data:{mime};base64,{}", BASE64.encode(bytes)));
    }

    /// Appends the user message and clears the draft. Returns `None` (and
    /// changes nothing) when there is nothing to send. The pending image is
    /// NOT cleared here; only a successful reply clears it, so a failed send
    /// can be retried without re-selecting the file.
    pub fn begin_send(&mut self) -> Option<UserTurn> {
        let trimmed = self.draft.trim().to_string();
        if trimmed.is_empty() && self.pending_image.is_none() {
            return None;
        }

        let content = build_content(self.model, &trimmed, self.pending_image.as_deref());
        let message = ChatMessage {
            role: Role::User,
            content,
            created_at: Some(OffsetDateTime::now_utc()),
        };
        self.messages.push(message.clone());
        self.draft.clear();

        Some(UserTurn {
            model: self.model.id,
            message,
        })
    }

    /// A successful round trip: append the reply, clear the attachment.
    pub fn accept_reply(&mut self, reply: String) {
        self.push_assistant(reply);
        self.pending_image = None;
    }

    /// A failed round trip: append the fixed error reply, keep the attachment.
    pub fn reject_reply(&mut self) {
        self.push_assistant(ERROR_REPLY.to_string());
    }

    fn push_assistant(&mut self, text: String) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: MessageContent::Text(text),
            created_at: Some(OffsetDateTime::now_utc()),
        });
    }
}

/// Vision-capable models take an ordered part list (text first, image
/// second, each only when present); everything else takes the trimmed text
/// as a plain string and silently drops any attachment.
pub fn build_content(model: &ModelInfo, trimmed: &str, image: Option<&str>) -> MessageContent {
    if !model.supports_image_input {
        return MessageContent::Text(trimmed.to_string());
    }

    let mut parts = Vec::new();
    if !trimmed.is_empty() {
        parts.push(ContentPart::Text {
            text: trimmed.to_string(),
        });
    }
    if let Some(url) = image {
        parts.push(ContentPart::ImageUrl {
            image_url: ImageSource {
                url: url.to_string(),
            },
        });
    }
    MessageContent::Parts(parts)
}

fn mime_for_file(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_guess_is_extension_based() {
        assert_eq!(mime_for_file("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for_file("diagram.svg"), "image/svg+xml");
        assert_eq!(mime_for_file("no-extension"), "image/png");
    }
}
