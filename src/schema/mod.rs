//! Entity records and their insert shapes.
//!
//! Every entity kind comes in two forms: the stored record (`Project`,
//! `Skill`, ...) which carries the store-assigned `id`, and the insert shape
//! (`NewProject`, `NewSkill`, ...) that callers hand to the store. Records
//! serialize with camelCase field names, which is what the site's client
//! expects on the wire.
//!
//! Contact submissions are the only input that arrives from the outside, so
//! `NewContactMessage` is the only insert shape with a validator
//! (see [`NewContactMessage::from_json`]).

mod contact;
mod project;
mod skill;
mod user;
mod validation;

pub use contact::{ContactMessage, NewContactMessage};
pub use project::{NewProject, Project, ProjectCategory};
pub use skill::{NewSkill, Skill, SkillCategory};
pub use user::{NewUser, User};
pub use validation::{is_valid_email, FieldError, IssueCode, ValidationErrors};

/// Synthetic, process-local identifier assigned by the store.
pub type Id = u32;
