use crate::apod::{ApodClient, NasaApod};
use crate::config::AppConfig;
use crate::images::store::ImageStore;
use crate::users::registry::UserRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub apod: Arc<dyn ApodClient>,
    pub images: ImageStore,
    pub users: UserRegistry,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let apod =
            Arc::new(NasaApod::new(&config.apod_base_url, &config.nasa_api_key)) as Arc<dyn ApodClient>;

        Ok(Self::from_parts(config, apod))
    }

    pub fn from_parts(config: Arc<AppConfig>, apod: Arc<dyn ApodClient>) -> Self {
        Self {
            config,
            apod,
            images: ImageStore::new(),
            users: UserRegistry::new(),
        }
    }

    pub fn fake() -> Self {
        use crate::images::store::Image;
        use async_trait::async_trait;

        struct FakeApod;
        #[async_trait]
        impl ApodClient for FakeApod {
            async fn fetch_daily(&self) -> anyhow::Result<Image> {
                Ok(Image {
                    date: "1995-06-16".into(),
                    explanation: "If the Earth could somehow be transformed to the ultra-high \
                                  density of a neutron star, it might appear as it does here."
                        .into(),
                    title: "Neutron Star Earth".into(),
                    url: "https://apod.nasa.gov/apod/image/e_lens.gif".into(),
                })
            }
        }

        let config = Arc::new(AppConfig {
            nasa_api_key: "test".into(),
            apod_base_url: "http://fake.local/apod".into(),
        });

        Self::from_parts(config, Arc::new(FakeApod))
    }
}
