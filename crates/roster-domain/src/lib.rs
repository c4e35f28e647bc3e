//! Domain types for group membership rosters.
//!
//! This crate models the "who belongs to this group" slice of an admin
//! backend: a [`User`] record as the user store hands it out, a [`Group`]
//! that owns a roster, and [`GroupMember`], the identity snapshot that
//! roster listings serialize instead of the full user record.
//!
//! Roster entries are point-in-time copies. They are built from a `User` by
//! shared reference, keep no link to it afterwards, and never resynchronize.

pub mod types;

pub use types::*;
