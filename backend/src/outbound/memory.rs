//! In-memory storage adapter.
//!
//! Backs both repository ports when no database is configured, and gives
//! tests a real adapter without I/O. Users and exercises live behind a single
//! mutex so each call observes a consistent snapshot.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{ExerciseEntry, User, UserId};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    usernames: HashSet<String>,
    exercises: HashMap<Uuid, Vec<ExerciseEntry>>,
}

impl Tables {
    fn find_user(&self, id: &UserId) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.id().as_uuid() == id.as_uuid())
    }
}

/// Mutex-guarded store implementing [`UserRepository`] and
/// [`ExerciseRepository`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use exercise_tracker::outbound::memory::MemoryStore;
///
/// let store = Arc::new(MemoryStore::default());
/// let _shared = Arc::clone(&store);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self.lock().map_err(UserPersistenceError::query)?;
        let username = user.username().to_string();
        if !tables.usernames.insert(username.clone()) {
            return Err(UserPersistenceError::duplicate_username(username));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::query)?;
        Ok(tables.find_user(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::query)?;
        Ok(tables.users.clone())
    }
}

#[async_trait]
impl ExerciseRepository for MemoryStore {
    async fn create(
        &self,
        user_id: &UserId,
        entry: &ExerciseEntry,
    ) -> Result<(), ExercisePersistenceError> {
        let mut tables = self.lock().map_err(ExercisePersistenceError::query)?;
        if tables.find_user(user_id).is_none() {
            return Err(ExercisePersistenceError::unknown_user(user_id.to_string()));
        }
        tables
            .exercises
            .entry(*user_id.as_uuid())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ExerciseEntry>, ExercisePersistenceError> {
        let tables = self.lock().map_err(ExercisePersistenceError::query)?;
        Ok(tables
            .exercises
            .get(user_id.as_uuid())
            .cloned()
            .unwrap_or_default())
    }
}
