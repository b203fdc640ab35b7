use serde::{Deserialize, Serialize};

use super::Id;

/// Fixed set of tags a skill can be grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Backend,
    Frontend,
    Database,
    Tools,
}

/// A skill with a self-assessed proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Id,
    pub name: String,
    pub category: SkillCategory,
    /// Intended range is 1-100; not enforced.
    pub level: i32,
}

/// Insert shape for [`Skill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: i32,
}

impl NewSkill {
    pub fn new(name: impl Into<String>, category: SkillCategory, level: i32) -> Self {
        Self {
            name: name.into(),
            category,
            level,
        }
    }

    pub(crate) fn into_record(self, id: Id) -> Skill {
        Skill {
            id,
            name: self.name,
            category: self.category,
            level: self.level,
        }
    }
}
