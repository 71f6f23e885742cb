use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::{Duration, Utc};
use serde_json::json;

use innkeep_auth::{verify_password, Admin};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

const TOKEN_TTL_HOURS: i64 = 24;

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_admin))
        .route("/login", post(login))
}

pub async fn create_admin(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CredentialsRequest>,
) -> axum::response::Response {
    match services.admins.find_by_username(&body.username) {
        Ok(Some(_)) => {
            return errors::json_error(
                StatusCode::CONFLICT,
                "conflict",
                "username is already taken",
            )
        }
        Ok(None) => {}
        Err(e) => return errors::engine_error_to_response(e.into()),
    }

    let admin = match Admin::create(body.username, &body.password, Utc::now()) {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.admins.insert(admin.clone()) {
        return errors::engine_error_to_response(e.into());
    }

    tracing::info!(username = %admin.username, "admin account created");
    (StatusCode::CREATED, Json(dto::admin_to_json(&admin))).into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CredentialsRequest>,
) -> axum::response::Response {
    let admin = match services.admins.find_by_username(&body.username) {
        Ok(Some(a)) => a,
        // Same response for unknown user and bad password.
        Ok(None) => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "invalid username or password",
            )
        }
        Err(e) => return errors::engine_error_to_response(e.into()),
    };

    if !verify_password(&body.password, &admin.password_hash) {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid username or password",
        );
    }

    let token = match services.jwt.issue(
        admin.admin_id,
        admin.username.clone(),
        Utc::now(),
        Duration::hours(TOKEN_TTL_HOURS),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "token issue failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal server error",
            );
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "access_token": token,
            "token_type": "bearer",
            "admin_id": admin.admin_id.to_string(),
        })),
    )
        .into_response()
}
