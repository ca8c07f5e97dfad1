//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name shown on the leaderboard: `@username`, else first name plus last name.
    /// `None` when the user has neither.
    pub fn display_name(&self) -> Option<String> {
        if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            return Some(format!("@{}", username));
        }
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: Option<&str>, first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: 1,
            username: username.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_username_wins() {
        let u = user(Some("alice"), Some("Alice"), Some("Liddell"));
        assert_eq!(u.display_name().as_deref(), Some("@alice"));
    }

    #[test]
    fn test_first_and_last_name() {
        let u = user(None, Some("Alice"), Some("Liddell"));
        assert_eq!(u.display_name().as_deref(), Some("Alice Liddell"));
        let u = user(None, Some("Alice"), None);
        assert_eq!(u.display_name().as_deref(), Some("Alice"));
    }

    #[test]
    fn test_no_name() {
        assert_eq!(user(None, None, None).display_name(), None);
        assert_eq!(user(Some(""), Some(""), None).display_name(), None);
    }
}
