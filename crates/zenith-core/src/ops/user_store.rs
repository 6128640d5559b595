use std::collections::HashMap;

use uuid::Uuid;
use zenith_core_types::Sensitive;

use crate::errors::{Result, ZenithError};
use crate::model::User;

/// In-memory user accounts
///
/// Independent of `CatalogStore`: separate map, separate lifecycle.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<String, User>,
    by_username: HashMap<String, String>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user under a fresh UUID v4 id
    ///
    /// # Errors
    ///
    /// * `InvalidUsername` - if the username is blank
    /// * `UsernameTaken` - if the username is already registered
    pub fn create_user(&mut self, username: &str, password: &str) -> Result<&User> {
        if username.trim().is_empty() {
            return Err(ZenithError::InvalidUsername {
                reason: "username cannot be empty".to_string(),
            });
        }
        if self.by_username.contains_key(username) {
            return Err(ZenithError::UsernameTaken {
                username: username.to_string(),
            });
        }

        let id = Uuid::new_v4().to_string();
        let user = User {
            id: id.clone(),
            username: username.to_string(),
            password: Sensitive::new(password.to_string()),
        };
        self.by_username.insert(username.to_string(), id.clone());
        Ok(self.users.entry(id).or_insert(user))
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<&User> {
        self.by_username
            .get(username)
            .and_then(|id| self.users.get(id))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
