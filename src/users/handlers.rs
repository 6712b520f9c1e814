use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use super::dto::UserRequest;
use crate::error::ApiError;
use crate::state::AppState;

fn require_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::Validation(
            "need field 'email' populated as JSON in the request body".into(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<StatusCode, ApiError> {
    require_email(&payload.email)?;

    state.users.create(&payload.email).map_err(|_| {
        warn!(email = %payload.email, "email already registered");
        ApiError::UserExists(payload.email.clone())
    })?;

    info!(email = %payload.email, "user created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, payload))]
pub async fn delete_user(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<StatusCode, ApiError> {
    require_email(&payload.email)?;

    // deleting an absent email still succeeds
    state.users.delete(&payload.email);

    info!(email = %payload.email, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
