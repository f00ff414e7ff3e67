//! A4F Chat: a single-window chat client for an OpenAI-compatible
//! `chat/completions` endpoint, with markdown rendering and per-block
//! syntax-highlighted, copyable code.

pub mod api;
pub mod markdown;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
