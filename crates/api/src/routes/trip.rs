use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/trips", post(handlers::trip::create_trip))
        .route("/api/trips", get(handlers::trip::list_trips))
}
