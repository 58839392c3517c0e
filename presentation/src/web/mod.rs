//! Single-page web UI
//!
//! `GET /` shows the form, `POST /` runs the pipeline and streams the page
//! one stage at a time, `POST /api/generate` returns the run report as JSON.

pub mod page;
pub mod server;
pub mod stream;

pub use server::{AppState, ServeError, create_router, serve};
