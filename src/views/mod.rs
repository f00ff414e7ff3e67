mod chat;
mod code_block;

pub use chat::ChatView;
