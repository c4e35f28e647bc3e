//! Type definitions for the roster domain.

mod groups;
mod ids;
mod users;

pub use groups::*;
pub use ids::*;
pub use users::*;
