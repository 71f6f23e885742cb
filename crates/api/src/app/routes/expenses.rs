use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use innkeep_ledger::Expense;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AdminContext;

pub fn router() -> Router {
    Router::new().route("/", get(list_expenses).post(create_expense))
}

pub async fn create_expense(
    admin: AdminContext,
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateExpenseRequest>,
) -> axum::response::Response {
    let expense = match Expense::record(
        body.category,
        body.amount,
        body.description,
        body.date,
        admin.admin_id(),
        Utc::now(),
    ) {
        Ok(e) => e,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.expenses.append(expense.clone()) {
        return errors::engine_error_to_response(e.into());
    }

    tracing::info!(
        category = %expense.category,
        amount = expense.amount,
        admin = %admin.username(),
        "expense recorded"
    );
    (StatusCode::CREATED, Json(expense)).into_response()
}

pub async fn list_expenses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.expenses.list() {
        Ok(expenses) => (StatusCode::OK, Json(json!({ "items": expenses }))).into_response(),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}
