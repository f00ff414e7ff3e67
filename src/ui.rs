use crate::theme::APP_CSS;
use crate::views::ChatView;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    rsx! {
        style { dangerous_inner_html: "{APP_CSS}" }
        div { class: "app",
            div { class: "header",
                h1 { "A4F GPT Chat" }
            }
            ChatView {}
        }
    }
}
