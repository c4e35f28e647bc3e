//! Group types and the membership roster.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GroupId, User, UserId};

/// Group record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<GroupId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// One user's entry in a group's member roster.
///
/// A point-in-time copy of the user's `id` and `username`, taken when the
/// entry is built. The entry keeps no link to the user record it came from:
/// later edits to that record do not show up here, and listings built from
/// these entries expose nothing else about the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: Option<UserId>,
    pub username: Option<String>,
}

impl From<&User> for GroupMember {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

/// Error type for roster operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembershipError {
    #[error("user {0} is already a member")]
    AlreadyMember(UserId),
}

impl Group {
    /// Snapshot `user` into the roster.
    ///
    /// Rosters are keyed by user id: adding a user whose id already appears
    /// is rejected. A user without an id has no identity to collide on and
    /// is always appended.
    pub fn add_member(&mut self, user: &User) -> Result<(), MembershipError> {
        if let Some(id) = &user.id {
            if self.has_member(id) {
                return Err(MembershipError::AlreadyMember(id.clone()));
            }
        }
        self.members.push(GroupMember::from(user));
        Ok(())
    }

    /// Whether any roster entry carries `user_id`.
    ///
    /// Entries without an id never match, including against an empty-string
    /// id (an empty string is a value, not an absence).
    pub fn has_member(&self, user_id: &UserId) -> bool {
        self.members.iter().any(|m| m.id.as_ref() == Some(user_id))
    }

    /// Drop every roster entry carrying `user_id`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_member(&mut self, user_id: &UserId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id.as_ref() != Some(user_id));
        self.members.len() != before
    }
}
