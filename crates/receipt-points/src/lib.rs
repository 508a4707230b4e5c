//! # Receipt Points
//!
//! A small HTTP service that accepts purchase receipts, stores them in
//! memory under a generated ID, and scores them on demand.
//!
//! ## Overview
//!
//! - **Create**: `POST /receipts/process` validates a receipt, stores it, and
//!   returns `{"id": ...}`
//! - **Points**: `GET /receipts/{id}/points` scores the stored receipt and
//!   returns `{"points": ...}`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points::{ReceiptService, ServiceConfig};
//! use receipt_points::store::MemoryStore;
//! use receipt_points::core::ReceiptBuilder;
//!
//! async fn example() {
//!     let service = ReceiptService::new(MemoryStore::new(), ServiceConfig::default());
//!
//!     let input = ReceiptBuilder::new("Target")
//!         .date("2022-01-02")
//!         .time("13:13")
//!         .item("Pepsi - 12-oz", "1.25")
//!         .total("1.25")
//!         .into_input();
//!
//!     let id = service.process_receipt(input).await.unwrap();
//!     let points = service.get_points(&id.to_string()).await.unwrap();
//!     assert_eq!(points, 31);
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Data model, validation, points engine
//! - `receipt_points::store` - Storage abstraction and in-memory table

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod service;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

pub use config::{CliArgs, ServerConfig};
pub use error::{Result, ServiceError};
pub use http::router;
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use service::{ReceiptService, ServiceConfig};

use std::future::IntoFuture;
use std::sync::Arc;

use receipt_points_store::MemoryStore;
use tokio::net::TcpListener;

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let service = Arc::new(ReceiptService::new(
        MemoryStore::new(),
        config.service_config(),
    ));
    let router = router(service);

    let listener = TcpListener::bind(config.http_bind_address).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(
        bind = %actual_addr,
        blank_descriptions_qualify = config.blank_descriptions_qualify,
        "listening"
    );

    let server_future = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    let result = server_future.await;
    tracing::info!("server stopped");
    result.map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
