use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use journal_server::{
    auth::create_access_token,
    config::Config,
    db,
    store::{JournalStore, MemoryStore, PgStore},
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journal_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    if matches!(command, Some("--help") | Some("-h")) {
        println!("Usage: journal-server [COMMAND]");
        println!();
        println!("Commands:");
        println!("  serve                   Run the HTTP server (default)");
        println!("  issue-token <USER_ID>   Print a bearer token for an existing user id");
        println!("  new-user                Create a fresh user id and print its token");
        return Ok(());
    }

    let config = Config::from_env()?;

    match command {
        None | Some("serve") => serve(config).await,
        Some("issue-token") => {
            let user_id = args
                .get(1)
                .context("issue-token requires a user id")?
                .parse::<Uuid>()
                .context("user id must be a UUID")?;
            let token = create_access_token(user_id, &config.jwt_secret, config.jwt_expires_in)?;
            println!("{}", token);
            Ok(())
        }
        Some("new-user") => {
            let user_id = Uuid::new_v4();
            let token = create_access_token(user_id, &config.jwt_secret, config.jwt_expires_in)?;
            println!("user id: {}", user_id);
            println!("token:   {}", token);
            Ok(())
        }
        Some(other) => anyhow::bail!("Unknown argument: {}", other),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let store: Arc<dyn JournalStore> = match &config.database_url {
        Some(url) => Arc::new(PgStore::new(db::create_pool(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set, journal data is kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = journal_server::create_router(store, config);

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
