use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity token for a committed record, question, or answer option.
///
/// Fresh ids are collision-resistant random identifiers (UUID v4), so two
/// creations in the same instant can never collide. Ids only need to be
/// unique within their sibling collection for the duration of the session.
///
/// Records that have not yet been committed carry no id (`Option<EntityId>`
/// is `None` on drafts).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh, collision-resistant id.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
