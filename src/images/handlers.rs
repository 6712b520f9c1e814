use axum::{extract::State, Json};
use tracing::{error, info, instrument};

use crate::error::ApiError;
use crate::images::store::Image;
use crate::state::AppState;

/// GET /image: fetch the daily picture from the provider, cache it by URL
/// and return it. A failed fetch is reported to the caller, never fatal.
#[instrument(skip(state))]
pub async fn fetch_image(State(state): State<AppState>) -> Result<Json<Image>, ApiError> {
    let image = match state.apod.fetch_daily().await {
        Ok(image) => image,
        Err(e) => {
            error!(error = %e, "fetching astronomy image failed");
            return Err(ApiError::Provider(e));
        }
    };

    info!(url = %image.url, title = %image.title, "image fetched and cached");
    state.images.insert(image.clone());

    Ok(Json(image))
}
