//! Account profiles keyed by an opaque user identifier.
//!
//! The hosted backend owns the real records; the service only needs read
//! access by id, so the store sits behind a trait.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl Profile {
    /// Name used in the dashboard greeting: full name, else the local part
    /// of the email address.
    pub fn greeting_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        match self.email.split('@').next().map(str::trim) {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => "there".to_string(),
        }
    }
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, AppError>;

    async fn upsert(&self, profile: Profile) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<String, Profile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let store = Self::new();
        for profile in profiles {
            store.profiles.insert(profile.id.clone(), profile);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, profile: Profile) -> Result<(), AppError> {
        if profile.id.trim().is_empty() {
            return Err(AppError::InvalidInput("profile id cannot be empty".to_string()));
        }
        tracing::debug!(user_id = %profile.id, "Storing profile");
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(full_name: Option<&str>, email: &str) -> Profile {
        Profile {
            id: "user-1".to_string(),
            email: email.to_string(),
            full_name: full_name.map(str::to_string),
        }
    }

    #[test]
    fn test_greeting_prefers_full_name() {
        assert_eq!(
            profile(Some("Grace Hopper"), "grace@example.com").greeting_name(),
            "Grace Hopper"
        );
        assert_eq!(profile(Some("  "), "grace@example.com").greeting_name(), "grace");
        assert_eq!(profile(None, "").greeting_name(), "there");
    }

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = InMemoryProfileStore::new();
        assert!(store.get("user-1").await.unwrap().is_none());

        store.upsert(profile(None, "a@example.com")).await.unwrap();
        let found = store.get("user-1").await.unwrap().unwrap();
        assert_eq!(found.email, "a@example.com");
        assert_eq!(store.len(), 1);

        let blank = Profile {
            id: " ".to_string(),
            email: String::new(),
            full_name: None,
        };
        assert!(store.upsert(blank).await.is_err());
    }
}
