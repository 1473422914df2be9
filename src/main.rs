use taskdeck::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging is active only when the user asked for it; the
    // message macros print plainly otherwise.
    if std::env::var("TASKDECK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=debug")))
            .init();
    }

    Cli::menu().await
}
