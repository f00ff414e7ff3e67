use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::time::Duration;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// How long the copy button reads "Copied!" after a click.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(1500);

const CODE_THEME: &str = "base16-ocean.dark";

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Tracks the transient "Copied!" label. Each activation bumps the epoch, so
/// a reset scheduled by an earlier click is a stale token and does nothing;
/// the last activation always owns the full feedback window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    epoch: u64,
    copied: bool,
}

impl CopyFeedback {
    pub fn activate(&mut self) -> u64 {
        self.copied = true;
        self.epoch += 1;
        self.epoch
    }

    pub fn expire(&mut self, token: u64) {
        if token == self.epoch {
            self.copied = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.copied
    }
}

fn copy_to_clipboard(text: String) {
    #[cfg(any(feature = "desktop", feature = "mobile"))]
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
    #[cfg(not(any(feature = "desktop", feature = "mobile")))]
    drop(text);
}

fn render_code_html(language: Option<&str>, code: &str) -> String {
    if let Some(lang) = language
        && let Some(syntax) = SYNTAX_SET.find_syntax_by_token(lang)
        && let Ok(html) = highlighted_html_for_string(
            code,
            &SYNTAX_SET,
            syntax,
            &THEME_SET.themes[CODE_THEME],
        )
    {
        return html;
    }
    format!(
        "<pre class=\"code-plain\"><code>{}</code></pre>",
        html_escape::encode_text(code)
    )
}

#[component]
pub fn CodeBlock(language: Option<String>, code: String) -> Element {
    let mut feedback = use_signal(CopyFeedback::default);
    let label = if feedback().is_active() {
        "Copied!"
    } else {
        "Copy"
    };
    let body_html = render_code_html(language.as_deref(), &code);
    let payload = code.clone();
    let on_copy = move |_| {
        copy_to_clipboard(payload.clone());
        let token = feedback.with_mut(|state| state.activate());
        spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK_WINDOW).await;
            feedback.with_mut(|state| state.expire(token));
        });
    };

    rsx! {
        div { class: "code-block",
            div { class: "code-block-head",
                if let Some(lang) = &language {
                    span { class: "code-lang", "{lang}" }
                }
                button { class: "copy-btn", r#type: "button", onclick: on_copy, "{label}" }
            }
            div { class: "code-block-body", dangerous_inner_html: "{body_html}" }
        }
    }
}
