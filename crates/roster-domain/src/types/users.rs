//! User types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// User record, as managed by the backing user store.
///
/// Every field is unset until the store fills it in; a freshly built user
/// has no id at all. Group rosters copy `id` and `username` out of this
/// record and leave everything else behind.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>, // None until the store assigns one
    pub username: Option<String>, // login handle; what rosters copy
    pub name: Option<String>, // full display name
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the backing store has assigned this user an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Best available human-readable label: name, else username, else email.
    pub fn display_label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
    }
}
