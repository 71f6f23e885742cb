//! `innkeep-api` — the HTTP surface over the engines.

pub mod app;
pub mod context;
pub mod middleware;
