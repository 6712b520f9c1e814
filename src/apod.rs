use anyhow::Context;
use async_trait::async_trait;

use crate::images::store::Image;

/// Client for the external astronomy-picture provider.
///
/// Kept behind a trait so tests can swap in a canned implementation without
/// touching the network.
#[async_trait]
pub trait ApodClient: Send + Sync {
    async fn fetch_daily(&self) -> anyhow::Result<Image>;
}

pub struct NasaApod {
    http: reqwest::Client,
    url: String,
}

impl NasaApod {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}?api_key={}&count=1", base_url, api_key),
        }
    }
}

#[async_trait]
impl ApodClient for NasaApod {
    async fn fetch_daily(&self) -> anyhow::Result<Image> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .context("request to APOD failed")?
            .error_for_status()
            .context("APOD returned an error status")?;

        // with count=1 the API still answers with a JSON array
        let mut images: Vec<Image> = resp.json().await.context("decode APOD response")?;
        images
            .pop()
            .ok_or_else(|| anyhow::anyhow!("APOD returned an empty result set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_key_and_count() {
        let client = NasaApod::new("https://api.nasa.gov/planetary/apod", "DEMO_KEY");
        assert_eq!(
            client.url,
            "https://api.nasa.gov/planetary/apod?api_key=DEMO_KEY&count=1"
        );
    }

    #[test]
    fn provider_payload_decodes_from_array() {
        let payload = r#"[{
            "date": "2024-03-01",
            "explanation": "A spiral galaxy seen edge on.",
            "title": "NGC 891",
            "url": "https://apod.nasa.gov/apod/image/ngc891.jpg",
            "media_type": "image"
        }]"#;
        let mut images: Vec<Image> = serde_json::from_str(payload).unwrap();
        let image = images.pop().unwrap();
        assert_eq!(image.date, "2024-03-01");
        assert_eq!(image.url, "https://apod.nasa.gov/apod/image/ngc891.jpg");
    }
}
