use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - a named grouping of posts owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
}

impl Category {
    /// Create a new category with a fresh id.
    pub fn new(user_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
        }
    }
}
