//! pokereview-server: pokemon and their reviews over HTTP
//!
//! Layers, leaf-first:
//! - [`models`]: records, transfer shapes, pagination
//! - [`store`]: storage traits plus the in-memory implementation
//! - [`db`]: PostgreSQL pool, migrations and the sqlx-backed store
//! - [`service`]: pokemon and review operations, including the
//!   review/parent ownership check
//! - [`http`]: axum router, extractors and error mapping

pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod store;

pub use http::{build_router, run_server, AppState, ServerConfig};
pub use service::{PokemonService, ReviewService, ServiceError};
pub use store::{MemoryStore, PokemonStore, ReviewStore, StoreError};
