//! Storage — the create/read contract for every entity kind.
//!
//! `Storage` is the seam the HTTP layer talks to. `MemStorage` is the only
//! implementation today; a database-backed store would implement the same
//! trait without touching callers.
//!
//! ## Example
//!
//! ```
//! use portfolio::{MemStorage, NewUser, Storage};
//!
//! let store = MemStorage::new();
//! assert_eq!(store.get_projects()?.len(), 6);
//!
//! let user = store.create_user(NewUser::new("ada", "hunter2"))?;
//! assert_eq!(store.get_user_by_username("ada")?, Some(user));
//! # Ok::<(), portfolio::StorageError>(())
//! ```

mod in_memory;
pub mod seed;
mod table;

pub use in_memory::MemStorage;

use thiserror::Error;

use crate::schema::{
    ContactMessage, Id, NewContactMessage, NewProject, NewSkill, NewUser, Project, Skill, User,
};

/// Failures a store can report.
///
/// Lookups that find nothing return `Ok(None)`; absence is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A writer panicked while holding a collection lock.
    #[error("storage lock poisoned for {0}")]
    LockPoisoned(&'static str),
}

/// Abstract create/read storage for the portfolio's entities.
///
/// Each `create_*` assigns the next identifier for that entity kind and
/// returns the full record. Identifiers start at 1, strictly increase and
/// are never reused. List operations return records in insertion order.
/// Input is assumed to be validated already.
pub trait Storage: Send + Sync {
    fn get_user(&self, id: Id) -> Result<Option<User>, StorageError>;

    /// First user (in insertion order) whose username equals `username`.
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    fn get_projects(&self) -> Result<Vec<Project>, StorageError>;

    fn get_project(&self, id: Id) -> Result<Option<Project>, StorageError>;

    fn create_project(&self, project: NewProject) -> Result<Project, StorageError>;

    fn get_skills(&self) -> Result<Vec<Skill>, StorageError>;

    fn create_skill(&self, skill: NewSkill) -> Result<Skill, StorageError>;

    /// Store a submission, stamping `created_at` with the current time.
    fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError>;

    fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError>;
}
