//! Case-insensitive search over the loaded user list.

use crate::models::UserRecord;

/// Whether `user` matches an already-lowercased search term.
///
/// A user matches when either the username or the email contains the term.
/// The empty term matches everyone.
fn matches_lowercase(user: &UserRecord, term: &str) -> bool {
    user.username.to_lowercase().contains(term) || user.email.to_lowercase().contains(term)
}

/// The users whose username or email contains `term`, in their original order.
pub fn filter_users<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    let term = term.to_lowercase();
    users
        .iter()
        .filter(|user| matches_lowercase(user, &term))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(crate) fn user(n: usize, username: &str, email: &str) -> UserRecord {
        UserRecord {
            id: format!("{n:024x}"),
            username: username.to_string(),
            email: email.to_string(),
            profile_picture_url: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            is_admin: false,
        }
    }

    fn directory() -> Vec<UserRecord> {
        vec![
            user(1, "Alice", "alice@acme.io"),
            user(2, "bob", "bob@example.com"),
            user(3, "Carol", "CAROL@ACME.IO"),
            user(4, "dave_acme", "dave@example.com"),
            user(5, "eve", "eve@example.org"),
        ]
    }

    #[test]
    fn test_empty_term_keeps_everyone() {
        let users = directory();
        let filtered = filter_users(&users, "");
        assert_eq!(filtered.len(), users.len());
        assert!(filtered.iter().zip(&users).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_matches_username_or_email_ignoring_case() {
        let users = directory();
        let names: Vec<&str> = filter_users(&users, "AcMe")
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Carol", "dave_acme"]);
    }

    #[test]
    fn test_substring_not_tokenized() {
        let users = directory();
        assert!(filter_users(&users, "example.c").iter().all(|u| u.email.ends_with(".com")));
        assert!(filter_users(&users, "alice acme").is_empty());
    }

    #[test]
    fn test_filter_is_exact_subset() {
        let users = directory();
        for term in ["a", "E", "@", "zzz", ".io"] {
            let filtered = filter_users(&users, term);
            let lowered = term.to_lowercase();
            let expected: Vec<&UserRecord> = users
                .iter()
                .filter(|u| {
                    u.username.to_lowercase().contains(&lowered)
                        || u.email.to_lowercase().contains(&lowered)
                })
                .collect();
            assert_eq!(filtered, expected, "term {term:?}");
        }
    }
}
