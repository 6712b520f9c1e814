pub mod dto;
pub mod handlers;
pub mod registry;

use crate::state::AppState;
use axum::{routing::post, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/user",
        post(handlers::create_user).delete(handlers::delete_user),
    )
}
