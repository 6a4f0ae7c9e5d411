//! HTTP server command
//!
//! Picks the store (PostgreSQL or in-memory), wires the services and runs
//! the server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pokereview_server::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use pokereview_server::db::{PgStore, PoolSettings};
use pokereview_server::{run_server, AppState, MemoryStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "POKEREVIEW_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL for PostgreSQL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep data in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request waits for a database connection before failing
    #[arg(long, default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub acquire_timeout: u64,
}

impl ServeArgs {
    fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = args.pool_settings();

    let state = if args.memory {
        if args.database_url.is_some() {
            tracing::warn!("--memory set, ignoring DATABASE_URL");
        }
        tracing::warn!("Using in-memory store - data is lost on shutdown");
        AppState::new(Arc::new(MemoryStore::new()))
    } else {
        let database_url = args.database_url.context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env or .env, or pass --memory",
        )?;

        let store = PgStore::connect(&database_url, &settings)
            .await
            .context("Failed to create database pool")?;

        store.migrate().await.context("Failed to run migrations")?;

        AppState::new(Arc::new(store))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting pokereview server on {}", args.bind);

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
