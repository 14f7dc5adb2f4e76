//! User display data.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A backend user, fetched lazily when a place's host is displayed.
///
/// Not cached across places; the frontend only ever needs the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Display name, e.g. "Ada Lovelace" or just "Ada" when the last
    /// name is missing.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = User {
            id: UserId::new("u-1"),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        };
        assert_eq!(user.full_name(), "Ada Lovelace");

        let user = User {
            id: UserId::new("u-2"),
            first_name: "Ada".into(),
            last_name: String::new(),
        };
        assert_eq!(user.full_name(), "Ada");
    }
}
