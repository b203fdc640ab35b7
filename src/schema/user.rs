use serde::{Deserialize, Serialize};

use super::Id;

/// A site user. Not exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password: String,
}

/// Insert shape for [`User`].
///
/// Username uniqueness is a caller convention (look up before insert);
/// the store accepts duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn into_record(self, id: Id) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
