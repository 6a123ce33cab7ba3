use super::UserStore;
use crate::domain::User;
use crate::error::{DirectoryError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
struct Indexes {
    users: HashMap<Uuid, User>,
    by_user_name: HashMap<String, Uuid>,
    by_email: HashMap<String, Uuid>,
}

/// In-memory user store for development/testing. One mutex guards the record
/// map and both unique indexes, so the existence check and the insert in
/// `insert_if_absent` happen inside a single critical section.
pub struct InMemoryUserStore {
    inner: Arc<Mutex<Indexes>>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Indexes::default())),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_by_user_name(&self, user_name: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        let user = inner
            .by_user_name
            .get(user_name)
            .and_then(|id| inner.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        let user = inner
            .by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn insert_if_absent(&self, user: &mut User) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();

        if inner.by_email.contains_key(&user.email) {
            return Err(DirectoryError::duplicate("email", &user.email));
        }
        if inner.by_user_name.contains_key(&user.user_name) {
            return Err(DirectoryError::duplicate("userName", &user.user_name));
        }

        let id = Uuid::new_v4();
        user.id = Some(id);
        inner.by_email.insert(user.email.clone(), id);
        inner.by_user_name.insert(user.user_name.clone(), id);
        inner.users.insert(id, user.clone());

        debug!("Created user: {} with id {}", user.user_name, id);
        Ok(())
    }
}
