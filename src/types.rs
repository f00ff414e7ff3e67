use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of a multi-part message body, in the OpenAI wire shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageSource },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
}

/// Message body: plain text serializes as a bare JSON string, multi-part
/// content as an array of tagged parts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
    /// Display metadata only, never sent to the backend.
    #[serde(skip)]
    pub created_at: Option<OffsetDateTime>,
}

/// Capability descriptor for one configured backend model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub supports_image_input: bool,
}

/// The fixed model table. Adding a model here is the only change needed
/// to expose it in the selector.
pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "provider-6/o3-medium",
        display_name: "O3-Medium (Vision)",
        supports_image_input: true,
    },
    ModelInfo {
        id: "provider-5/gpt-4.1-mini",
        display_name: "GPT-4.1-mini",
        supports_image_input: false,
    },
    ModelInfo {
        id: "provider-6/gpt-4.1",
        display_name: "GPT-4.1",
        supports_image_input: false,
    },
    ModelInfo {
        id: "provider-5/gemini-1.5-pro-latest",
        display_name: "Gemini",
        supports_image_input: false,
    },
];

pub fn default_model() -> &'static ModelInfo {
    &MODELS[0]
}

pub fn model_by_id(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|model| model.id == id)
}
