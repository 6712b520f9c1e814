pub mod handlers;
pub mod store;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/image", get(handlers::fetch_image))
}
