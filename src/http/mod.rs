//! Interactive dashboard shell over HTTP
//!
//! Serves the embedded page and a small JSON/SVG API. Each request runs one
//! full render cycle from the selection in its query string.

pub mod handler;
pub mod server;

pub use handler::{ApiError, DashboardResponse, OptionsResponse, SelectionParams};
pub use server::{router, HttpServer};
