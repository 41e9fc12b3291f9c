//! AuditFlow server binary

use anyhow::Context;
use clap::Parser;
use std::env;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use audit_store::DatabasePool;
use auditflow_server::{create_app, AuditServer, ServerConfig};

/// AuditFlow audit lifecycle and scoring server
#[derive(Parser, Debug)]
#[command(name = "auditflow-server", version, about)]
struct Args {
    /// Host address to bind to
    #[arg(long, env = "AUDITFLOW_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "AUDITFLOW_PORT", default_value_t = 8080)]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "AUDITFLOW_MAX_CONNECTIONS", default_value_t = 10)]
    max_connections: u32,

    /// Skip running embedded migrations at startup
    #[arg(long, default_value_t = false)]
    skip_migrations: bool,

    /// Enable debug-level logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Initialize structured logging
///
/// Development gets human-readable output with source locations; any
/// other `AUDITFLOW_ENV` gets JSON lines for log aggregation. An
/// explicit `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let is_development =
        env::var("AUDITFLOW_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("auditflow_server={level},audit_store={level},tower_http=info,sqlx=warn").into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    info!("Starting AuditFlow server");

    let database = DatabasePool::new(&args.database_url, args.max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;

    if args.skip_migrations {
        info!("Skipping embedded migrations");
    } else {
        database
            .run_migrations()
            .await
            .context("Failed to run database migrations")?;
    }

    let config = ServerConfig {
        name: "AuditFlow Server".to_string(),
        host: args.host.clone(),
        port: args.port,
    };
    let server = AuditServer::new_with_pool_and_config(database.pool().clone(), config);
    let app = create_app(server);

    let bind_address = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {bind_address}"))?;

    info!("🚀 AuditFlow server running on http://{bind_address}");
    info!("📋 Health check available at http://{bind_address}/health");
    info!("📘 OpenAPI document available at http://{bind_address}/openapi.json");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
