use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use super::dto::{DeleteRatingRequest, ListRatingsQuery, RatingRequest};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::registry::UserRecord;

const MIN_STARS: i64 = 1;
const MAX_STARS: i64 = 5;

fn require(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(format!(
            "need field '{}' populated",
            field
        )));
    }
    Ok(())
}

fn validate_stars(rating: i64) -> Result<u8, ApiError> {
    if !(MIN_STARS..=MAX_STARS).contains(&rating) {
        return Err(ApiError::Validation(format!(
            "rating must be between {} and {}, got {}",
            MIN_STARS, MAX_STARS, rating
        )));
    }
    Ok(rating as u8)
}

/// Validate the email and resolve the owning user record. The registry
/// lock is already released by the time the record comes back.
fn resolve_user(state: &AppState, email: &str) -> Result<Arc<UserRecord>, ApiError> {
    require("email", email)?;
    state
        .users
        .get(email)
        .ok_or_else(|| ApiError::UserNotFound(email.to_owned()))
}

#[instrument(skip(state, payload))]
pub async fn create_rating(
    State(state): State<AppState>,
    Json(payload): Json<RatingRequest>,
) -> Result<StatusCode, ApiError> {
    let user = resolve_user(&state, &payload.email)?;
    require("imageURL", &payload.image_url)?;
    let stars = validate_stars(payload.rating)?;

    user.insert_rating(&payload.image_url, stars).map_err(|_| {
        warn!(email = %payload.email, url = %payload.image_url, "rating already exists");
        ApiError::RatingExists(payload.image_url.clone())
    })?;

    info!(email = %payload.email, url = %payload.image_url, stars, "rating created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state))]
pub async fn list_ratings(
    State(state): State<AppState>,
    Query(query): Query<ListRatingsQuery>,
) -> Result<Json<HashMap<String, u8>>, ApiError> {
    let user = resolve_user(&state, &query.email)?;
    Ok(Json(user.ratings()))
}

#[instrument(skip(state, payload))]
pub async fn update_rating(
    State(state): State<AppState>,
    Json(payload): Json<RatingRequest>,
) -> Result<StatusCode, ApiError> {
    let user = resolve_user(&state, &payload.email)?;
    require("imageURL", &payload.image_url)?;
    let stars = validate_stars(payload.rating)?;

    user.update_rating(&payload.image_url, stars).map_err(|_| {
        warn!(email = %payload.email, url = %payload.image_url, "no rating to update");
        ApiError::RatingNotFound(payload.image_url.clone())
    })?;

    info!(email = %payload.email, url = %payload.image_url, stars, "rating updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
pub async fn delete_rating(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRatingRequest>,
) -> Result<StatusCode, ApiError> {
    let user = resolve_user(&state, &payload.email)?;
    require("imageURL", &payload.image_url)?;

    user.remove_rating(&payload.image_url).map_err(|_| {
        warn!(email = %payload.email, url = %payload.image_url, "no rating to delete");
        ApiError::RatingNotFound(payload.image_url.clone())
    })?;

    info!(email = %payload.email, url = %payload.image_url, "rating deleted");
    Ok(StatusCode::NO_CONTENT)
}
