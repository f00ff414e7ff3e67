/// The fixed application stylesheet, injected once from the root component.
pub const APP_CSS: &str = r#"
:root {
    --color-bg-primary: #0d1117;
    --color-bg-secondary: #161b22;
    --color-text-primary: #e6edf3;
    --color-text-muted: #8b949e;
    --color-border: #30363d;
    --color-input-bg: #0d1117;
    --color-chat-user-bg: #1f6feb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #161b22;
    --color-chat-assistant-text: #e6edf3;
    --color-accent: #2ea043;
    --color-code-head: #21262d;
    font-size: 14px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--color-bg-primary);
    color: var(--color-text-primary);
    font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
}

.app { display: flex; flex-direction: column; height: 100vh; }

.header { padding: 0.75rem 1.25rem; border-bottom: 1px solid var(--color-border); }
.header h1 { margin: 0; font-size: 1.2rem; }

.main-container { display: flex; flex-direction: column; flex: 1; min-height: 0; }

.model-select {
    display: flex; align-items: center; gap: 0.5rem;
    padding: 0.5rem 1.25rem; border-bottom: 1px solid var(--color-border);
    color: var(--color-text-muted);
}
.model-select select {
    background: var(--color-input-bg); color: var(--color-text-primary);
    border: 1px solid var(--color-border); border-radius: 6px; padding: 0.25rem 0.5rem;
}

.chat-list { flex: 1; overflow-y: auto; padding: 1rem 1.25rem; }

.message-row { margin-bottom: 0.75rem; display: flex; flex-direction: column; }
.message-row.user { align-items: flex-end; }
.message-row.assistant { align-items: flex-start; }

.bubble {
    max-width: 48rem; padding: 0.5rem 0.85rem; border-radius: 10px;
    border: 1px solid var(--color-border);
}
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.bubble.assistant { background: var(--color-chat-assistant-bg); color: var(--color-chat-assistant-text); }
.role-label { display: block; font-size: 0.75rem; opacity: 0.8; margin-bottom: 0.2rem; }
.bubble-image { max-width: 100%; max-height: 200px; border-radius: 8px; margin-top: 0.35rem; }

.message-meta { margin-top: 0.15rem; }
.message-timestamp { font-size: 0.7rem; color: var(--color-text-muted); }

.md .prose p { margin: 0.35rem 0; }
.md .prose table { border-collapse: collapse; margin: 0.5rem 0; }
.md .prose th, .md .prose td { border: 1px solid var(--color-border); padding: 0.25rem 0.6rem; }

.code-block { margin: 0.5rem 0; border: 1px solid var(--color-border); border-radius: 8px; overflow: hidden; }
.code-block-head {
    display: flex; justify-content: space-between; align-items: center;
    padding: 0.25rem 0.6rem; background: var(--color-code-head);
}
.code-lang { font-size: 0.75rem; color: var(--color-text-muted); font-family: monospace; }
.copy-btn {
    margin-left: auto; padding: 2px 8px; font-size: 0.75rem;
    background: #333; color: #fff; border: none; border-radius: 4px; cursor: pointer;
}
.code-block-body pre { margin: 0; padding: 0.6rem; overflow-x: auto; font-size: 0.85rem; }
.code-plain { font-family: monospace; white-space: pre-wrap; }

.image-preview { padding: 0.5rem 1.25rem; }
.image-preview img { display: block; max-width: 100%; max-height: 200px; border-radius: 8px; margin-top: 0.25rem; }

.composer { padding: 0.75rem 1.25rem; border-top: 1px solid var(--color-border); }
.composer-inner { display: flex; gap: 0.5rem; align-items: flex-end; }
.composer textarea {
    flex: 1; resize: none; background: var(--color-input-bg);
    color: var(--color-text-primary); border: 1px solid var(--color-border);
    border-radius: 8px; padding: 0.5rem 0.75rem; font: inherit;
}
.composer textarea:focus { outline: none; border-color: var(--color-text-muted); }
.composer input[type="file"] { color: var(--color-text-muted); max-width: 14rem; }

.btn {
    padding: 0.5rem 1rem; border-radius: 8px; border: 1px solid var(--color-border);
    background: transparent; color: var(--color-text-primary); cursor: pointer;
}
.btn-primary { background: var(--color-accent); border-color: var(--color-accent); color: #fff; }
.btn-primary:hover { filter: brightness(1.1); }
"#;
