pub mod dto;
pub mod handlers;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/rating",
        get(handlers::list_ratings)
            .post(handlers::create_rating)
            .put(handlers::update_rating)
            .delete(handlers::delete_rating),
    )
}
