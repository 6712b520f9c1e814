use anyhow::Context;

const DEFAULT_APOD_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nasa_api_key: String,
    pub apod_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let nasa_api_key = std::env::var("NASA_API_KEY")
            .context("required environment variable NASA_API_KEY not set")?;
        let apod_base_url =
            std::env::var("APOD_BASE_URL").unwrap_or_else(|_| DEFAULT_APOD_BASE_URL.into());
        Ok(Self {
            nasa_api_key,
            apod_base_url,
        })
    }
}
