use serde::{Deserialize, Serialize};

/// Body for replacing a user's interest list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterestsUpdate {
    /// Free-form interest labels; the backend stores them as-is.
    pub interests: Vec<String>,
}
