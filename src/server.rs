//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, service wiring and the Axum server
//! lifecycle.

use crate::application::services::{DefaultCustomerService, DefaultOrderService};
use crate::config::Config;
use crate::domain::repositories::{CustomerRepository, OrderRepository, StorageHealth};
use crate::infrastructure::persistence::{
    InMemoryCustomerRepository, InMemoryOrderRepository, MemoryStore, PgCustomerRepository,
    PgOrderRepository, PgStorageHealth,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds a PostgreSQL pool from the pool settings in `config`.
///
/// # Errors
///
/// Returns an error if the database is unreachable within the connect timeout.
pub async fn connect_pool(database_url: &str, config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;
    Ok(())
}

/// Wires services on top of the given repositories.
pub fn build_state<C, O>(
    customers: Arc<C>,
    orders: Arc<O>,
    storage: Arc<dyn StorageHealth>,
) -> AppState
where
    C: CustomerRepository + 'static,
    O: OrderRepository + 'static,
{
    let customer_service = DefaultCustomerService::new(customers.clone(), orders.clone());
    let order_service = DefaultOrderService::new(orders, customers);

    AppState::new(Arc::new(customer_service), Arc::new(order_service), storage)
}

/// Builds an [`AppState`] backed by a fresh in-memory store.
pub fn in_memory_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    let customers = Arc::new(InMemoryCustomerRepository::new(store.clone()));
    let orders = Arc::new(InMemoryOrderRepository::new(store.clone()));

    build_state(customers, orders, store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (or the in-memory store)
/// - Customer and order services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = match &config.database_url {
        Some(database_url) => {
            let pool = connect_pool(database_url, &config).await?;
            tracing::info!("Connected to database");

            migrate(&pool).await?;
            tracing::info!("Migrations applied");

            let pool = Arc::new(pool);
            build_state(
                Arc::new(PgCustomerRepository::new(pool.clone())),
                Arc::new(PgOrderRepository::new(pool.clone())),
                Arc::new(PgStorageHealth::new(pool)),
            )
        }
        None => {
            tracing::warn!("No database configured. Using in-memory storage.");
            in_memory_state()
        }
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
