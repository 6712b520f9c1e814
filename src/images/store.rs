use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A cached astronomy picture, keyed by its canonical URL.
///
/// Field names match the provider's JSON exactly; records are never mutated
/// after creation, only replaced wholesale on refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub date: String,
    pub explanation: String,
    pub title: String,
    pub url: String,
}

/// Volatile cache of fetched pictures. Rebuilt empty on every start,
/// no eviction.
#[derive(Clone, Default)]
pub struct ImageStore {
    images: Arc<RwLock<HashMap<String, Image>>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any previous entry for the same URL.
    pub fn insert(&self, image: Image) {
        self.images.write().insert(image.url.clone(), image);
    }

    pub fn get(&self, url: &str) -> Option<Image> {
        self.images.read().get(url).cloned()
    }

    pub fn len(&self) -> usize {
        self.images.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, title: &str) -> Image {
        Image {
            date: "2024-03-01".into(),
            explanation: "test".into(),
            title: title.into(),
            url: url.into(),
        }
    }

    #[test]
    fn insert_then_get_roundtrip() {
        let store = ImageStore::new();
        assert!(store.is_empty());

        store.insert(image("https://apod/1.jpg", "one"));
        let got = store.get("https://apod/1.jpg").expect("cached");
        assert_eq!(got.title, "one");
        assert!(store.get("https://apod/2.jpg").is_none());
    }

    #[test]
    fn refetch_overwrites_same_url() {
        let store = ImageStore::new();
        store.insert(image("https://apod/1.jpg", "first"));
        store.insert(image("https://apod/1.jpg", "second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("https://apod/1.jpg").unwrap().title, "second");
    }
}
