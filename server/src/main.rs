use anyhow::Context;
use clap::Parser;
use item_server::{config::Args, db::ItemStore, handlers};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let store = ItemStore::open(&args.database)
        .with_context(|| format!("failed to open database {}", args.database.display()))?;
    let app = handlers::create_app(store);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!("Listening on http://{}", args.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
