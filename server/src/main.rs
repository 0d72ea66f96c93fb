use anyhow::Context;
use todo_store::TodoStore;
use tokio::net::TcpListener;
use tracing::info;

/// Database file path, fixed relative to the working directory.
const DB_PATH: &str = "todo.db";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,todo_store=info".into()),
        )
        .init();

    // A file that exists but cannot be loaded aborts startup; it is never
    // replaced with a fresh empty database.
    let store = TodoStore::open(DB_PATH).context("failed to open todo database")?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, todo_server::app(store))
        .await
        .context("server error")?;
    Ok(())
}
