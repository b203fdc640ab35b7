//! MemStorage - RwLock-guarded tables, one per entity kind.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::table::Table;
use super::{seed, Storage, StorageError};
use crate::schema::{
    ContactMessage, Id, NewContactMessage, NewProject, NewSkill, NewUser, Project, Skill, User,
};

#[derive(Default)]
struct Collections {
    users: RwLock<Table<User>>,
    projects: RwLock<Table<Project>>,
    skills: RwLock<Table<Skill>>,
    contact_messages: RwLock<Table<ContactMessage>>,
}

/// In-memory store seeded with the demo projects and skills.
///
/// Each entity kind has its own lock, so a create on one kind never waits
/// on another. Clone-friendly via Arc; clones share the same data.
#[derive(Clone)]
pub struct MemStorage {
    inner: Arc<Collections>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Create a store holding the seed projects and skills.
    pub fn new() -> Self {
        let mut projects = Table::default();
        for project in seed::projects() {
            projects.insert_with(|id| project.into_record(id));
        }

        let mut skills = Table::default();
        for skill in seed::skills() {
            skills.insert_with(|id| skill.into_record(id));
        }
        tracing::debug!("seeded in-memory store");

        Self {
            inner: Arc::new(Collections {
                projects: RwLock::new(projects),
                skills: RwLock::new(skills),
                ..Collections::default()
            }),
        }
    }

    /// Create a store with no seed data.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Collections::default()),
        }
    }
}

fn read<'a, T>(
    lock: &'a RwLock<Table<T>>,
    name: &'static str,
) -> Result<RwLockReadGuard<'a, Table<T>>, StorageError> {
    lock.read().map_err(|_| StorageError::LockPoisoned(name))
}

fn write<'a, T>(
    lock: &'a RwLock<Table<T>>,
    name: &'static str,
) -> Result<RwLockWriteGuard<'a, Table<T>>, StorageError> {
    lock.write().map_err(|_| StorageError::LockPoisoned(name))
}

impl Storage for MemStorage {
    fn get_user(&self, id: Id) -> Result<Option<User>, StorageError> {
        Ok(read(&self.inner.users, "users")?.get(id))
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(read(&self.inner.users, "users")?.find(|user| user.username == username))
    }

    fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        Ok(write(&self.inner.users, "users")?.insert_with(|id| user.into_record(id)))
    }

    fn get_projects(&self) -> Result<Vec<Project>, StorageError> {
        Ok(read(&self.inner.projects, "projects")?.all())
    }

    fn get_project(&self, id: Id) -> Result<Option<Project>, StorageError> {
        Ok(read(&self.inner.projects, "projects")?.get(id))
    }

    fn create_project(&self, project: NewProject) -> Result<Project, StorageError> {
        Ok(write(&self.inner.projects, "projects")?.insert_with(|id| project.into_record(id)))
    }

    fn get_skills(&self) -> Result<Vec<Skill>, StorageError> {
        Ok(read(&self.inner.skills, "skills")?.all())
    }

    fn create_skill(&self, skill: NewSkill) -> Result<Skill, StorageError> {
        Ok(write(&self.inner.skills, "skills")?.insert_with(|id| skill.into_record(id)))
    }

    fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError> {
        let mut messages = write(&self.inner.contact_messages, "contact_messages")?;
        Ok(messages.insert_with(|id| message.into_record(id, Utc::now())))
    }

    fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError> {
        Ok(read(&self.inner.contact_messages, "contact_messages")?.all())
    }
}
