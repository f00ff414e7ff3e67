use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env if present (development convenience); the API base URL and
    // key may also come straight from the process environment.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("a4f_chat=info")),
        )
        .init();

    dioxus::launch(a4f_chat::ui::App);
}
