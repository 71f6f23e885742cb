use axum::{routing::get, Router};

pub mod admin;
pub mod bookings;
pub mod dashboard;
pub mod expenses;
pub mod guests;
pub mod rooms;
pub mod sales;
pub mod system;

/// The whole route table. Read endpoints and booking/guest creation are
/// open; mutating catalog/status/expense handlers gate themselves by
/// extracting [`crate::context::AdminContext`].
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/whoami", get(system::whoami))
        .nest("/admin", admin::router())
        .nest("/rooms", rooms::router())
        .nest("/guests", guests::router())
        .nest("/bookings", bookings::router())
        .nest("/sales", sales::router())
        .nest("/expenses", expenses::router())
        .nest("/dashboard", dashboard::router())
}
