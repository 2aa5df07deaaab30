/// Quill Server - multi-user notes server
use clap::{Parser, Subcommand};
use quill_server::{config::ServerConfig, create_router, state::AppState, TokenService};
use quill_storage::SqliteStorage;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quill-server")]
#[command(about = "Quill multi-user notes server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new account
    AddUser {
        /// Display name
        #[arg(long)]
        full_name: String,
        /// Email address (unique, case-insensitive)
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long, env = "QUILL_NEW_USER_PASSWORD")]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddUser {
            full_name,
            email,
            password,
        } => add_user(config, &full_name, &email, &password).await?,
    }

    Ok(())
}

async fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let pool = quill_storage::create_pool(&config.storage.database_url).await?;
    quill_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let storage = Arc::new(SqliteStorage::new(pool));

    let tokens = Arc::new(TokenService::new(
        &config.auth.jwt_secret,
        chrono::Duration::minutes(i64::try_from(config.auth.token_expiration_minutes)?),
    ));
    tracing::info!(
        "Token service initialized ({} minute expiry)",
        tokens.expiration().num_minutes()
    );

    Ok(AppState::from_storage(
        storage,
        tokens,
        config.auth.bcrypt_cost,
    ))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Quill Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app_state = build_state(&config).await?;
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn add_user(
    config: ServerConfig,
    full_name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let app_state = build_state(&config).await?;

    let session = app_state
        .accounts
        .sign_up(full_name, email, password)
        .await?;

    println!("Created user {} <{}>", session.user.id, session.user.email);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
