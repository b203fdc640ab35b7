mod config;
mod schema;
pub mod storage;

#[cfg(feature = "http")]
pub mod http;

pub use config::{ConfigError, ContactDetails, Profile, ServerConfig, SocialLinks, Stats};
pub use schema::{
    is_valid_email, ContactMessage, FieldError, Id, IssueCode, NewContactMessage, NewProject,
    NewSkill, NewUser, Project, ProjectCategory, Skill, SkillCategory, User, ValidationErrors,
};
pub use storage::{MemStorage, Storage, StorageError};
