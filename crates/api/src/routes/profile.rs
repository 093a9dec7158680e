use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/profile", get(handlers::profile::get_profile))
        .route("/api/profile", put(handlers::profile::update_profile))
        .route(
            "/api/profile/verify/send",
            post(handlers::profile::send_verification),
        )
        .route(
            "/api/profile/verify/confirm",
            post(handlers::profile::confirm_verification),
        )
}
