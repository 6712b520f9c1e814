use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user already exists")]
    UserExists,
    #[error("rating already exists")]
    RatingExists,
    #[error("rating not found")]
    RatingNotFound,
}

/// A registered user's rating ledger: image URL -> stars.
///
/// The ledger carries its own lock, so rating traffic for one user never
/// blocks rating traffic for another. Callers obtain the record through
/// [`UserRegistry::get`] and work on it with the registry lock released.
#[derive(Debug, Default)]
pub struct UserRecord {
    ratings: Mutex<HashMap<String, u8>>,
}

impl UserRecord {
    /// Create vs update are distinct: inserting over an existing rating
    /// is an error, callers must update instead.
    pub fn insert_rating(&self, url: &str, stars: u8) -> Result<(), RegistryError> {
        let mut ratings = self.ratings.lock();
        if ratings.contains_key(url) {
            return Err(RegistryError::RatingExists);
        }
        ratings.insert(url.to_owned(), stars);
        Ok(())
    }

    pub fn update_rating(&self, url: &str, stars: u8) -> Result<(), RegistryError> {
        match self.ratings.lock().get_mut(url) {
            Some(current) => {
                *current = stars;
                Ok(())
            }
            None => Err(RegistryError::RatingNotFound),
        }
    }

    pub fn remove_rating(&self, url: &str) -> Result<(), RegistryError> {
        match self.ratings.lock().remove(url) {
            Some(_) => Ok(()),
            None => Err(RegistryError::RatingNotFound),
        }
    }

    /// Snapshot of the ledger at the time of the call.
    pub fn ratings(&self) -> HashMap<String, u8> {
        self.ratings.lock().clone()
    }
}

/// Top-level mapping from email to user record.
///
/// The outer lock guards only the map itself; every accessor releases it
/// before any per-user work starts. Deleting a user while another request
/// still holds its record is fine: the straggler finishes against the
/// detached record, which is dropped with the last reference.
#[derive(Clone, Default)]
pub struct UserRegistry {
    users: Arc<RwLock<HashMap<String, Arc<UserRecord>>>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an email with an empty ledger. Duplicates are rejected.
    pub fn create(&self, email: &str) -> Result<(), RegistryError> {
        let mut users = self.users.write();
        if users.contains_key(email) {
            return Err(RegistryError::UserExists);
        }
        users.insert(email.to_owned(), Arc::new(UserRecord::default()));
        Ok(())
    }

    /// Idempotent: removing an unknown email is a successful no-op.
    /// The user's ledger goes with the record.
    pub fn delete(&self, email: &str) {
        self.users.write().remove(email);
    }

    pub fn get(&self, email: &str) -> Option<Arc<UserRecord>> {
        self.users.read().get(email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_delete_removes_user() {
        let registry = UserRegistry::new();
        registry.create("a@x.com").unwrap();
        assert!(registry.get("a@x.com").is_some());

        registry.delete("a@x.com");
        assert!(registry.get("a@x.com").is_none());
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let registry = UserRegistry::new();
        registry.create("a@x.com").unwrap();
        assert_eq!(registry.create("a@x.com"), Err(RegistryError::UserExists));
    }

    #[test]
    fn delete_of_absent_email_is_a_no_op() {
        let registry = UserRegistry::new();
        registry.delete("ghost@x.com");
        registry.delete("ghost@x.com");
    }

    #[test]
    fn delete_cascades_the_ledger() {
        let registry = UserRegistry::new();
        registry.create("a@x.com").unwrap();
        registry
            .get("a@x.com")
            .unwrap()
            .insert_rating("https://img/1", 5)
            .unwrap();

        registry.delete("a@x.com");
        registry.create("a@x.com").unwrap();
        assert!(registry.get("a@x.com").unwrap().ratings().is_empty());
    }

    #[test]
    fn ledger_create_read_update_delete() {
        let record = UserRecord::default();

        record.insert_rating("https://img/1", 5).unwrap();
        assert_eq!(
            record.insert_rating("https://img/1", 2),
            Err(RegistryError::RatingExists)
        );
        assert_eq!(record.ratings().get("https://img/1"), Some(&5));

        record.update_rating("https://img/1", 3).unwrap();
        assert_eq!(record.ratings().get("https://img/1"), Some(&3));

        record.remove_rating("https://img/1").unwrap();
        assert_eq!(
            record.remove_rating("https://img/1"),
            Err(RegistryError::RatingNotFound)
        );
        assert!(record.ratings().is_empty());
    }

    #[test]
    fn update_without_existing_rating_fails() {
        let record = UserRecord::default();
        assert_eq!(
            record.update_rating("https://img/1", 4),
            Err(RegistryError::RatingNotFound)
        );
    }

    #[test]
    fn concurrent_ratings_on_one_user_all_land() {
        let registry = UserRegistry::new();
        registry.create("a@x.com").unwrap();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let user = registry.get("a@x.com").expect("user exists");
                    user.insert_rating(&format!("https://img/{}", i), (i % 5 + 1) as u8)
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.get("a@x.com").unwrap().ratings().len(), 32);
    }

    #[test]
    fn concurrent_create_of_same_email_has_one_winner() {
        let registry = UserRegistry::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.create("race@x.com").is_ok())
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(wins, 1);
    }

    #[test]
    fn rating_op_racing_a_user_delete_never_corrupts() {
        let registry = UserRegistry::new();
        registry.create("a@x.com").unwrap();

        // A handler that resolved the record before the delete keeps a
        // detached but fully usable ledger; the registry itself is unchanged.
        let record = registry.get("a@x.com").unwrap();
        registry.delete("a@x.com");

        record.insert_rating("https://img/1", 4).unwrap();
        assert_eq!(record.ratings().len(), 1);
        assert!(registry.get("a@x.com").is_none());
    }
}
