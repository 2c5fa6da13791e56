//! Ventas HTTP service.
//!
//! Server-rendered pages over the flat-file record store:
//!
//! - `GET /` / `POST /` — sale registration form and submission
//! - `GET /listado` — all recorded sales
//! - `GET /cliente/:id` — per-customer aggregate and tier classification
//! - `GET /health` — liveness probe
//!
//! The store and the classifier model are constructed once in `main` and
//! handed to the handlers through [`AppState`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers all return Result
#![allow(clippy::missing_errors_doc)]
// Handlers without await still need async signatures for routing
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
