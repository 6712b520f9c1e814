use serde::Deserialize;

/// Body for POST /rating and PUT /rating. Missing fields deserialize to
/// their empty defaults and fail the handler's own validation with 400,
/// so a half-filled body never reaches the store.
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
    #[serde(default)]
    pub rating: i64,
}

/// Body for DELETE /rating.
#[derive(Debug, Deserialize)]
pub struct DeleteRatingRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
}

/// Query string for GET /rating.
#[derive(Debug, Deserialize)]
pub struct ListRatingsQuery {
    #[serde(default)]
    pub email: String,
}
