//! User repository implementation.

use pqphub_core::result::AppResult;
use pqphub_entity::user::{User, UserRole};

use crate::connection::Database;

/// Repository for account records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a user unless the email is already registered (any case).
    ///
    /// Returns `None` when the email is taken.
    pub async fn create(&self, user: User) -> AppResult<Option<User>> {
        self.db
            .mutate(|doc| {
                if doc.users.iter().any(|u| u.has_email(&user.email)) {
                    return None;
                }
                doc.users.push(user.clone());
                Some(user)
            })
            .await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.db
            .read(|doc| doc.users.iter().find(|u| u.has_email(email)).cloned())
            .await
    }

    /// List all users in insertion order.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.db.read(|doc| doc.users.clone()).await
    }

    /// Change a user's role. Returns `false` if no such email.
    pub async fn set_role_by_email(&self, email: &str, role: UserRole) -> AppResult<bool> {
        self.update_by_email(email, |user| user.role = role).await
    }

    /// Replace a user's password hash. Returns `false` if no such email.
    pub async fn set_password_by_email(&self, email: &str, password_hash: &str) -> AppResult<bool> {
        self.update_by_email(email, |user| user.password_hash = password_hash.to_string())
            .await
    }

    async fn update_by_email(&self, email: &str, f: impl FnOnce(&mut User)) -> AppResult<bool> {
        self.db
            .mutate(|doc| {
                let user = doc.users.iter_mut().find(|u| u.has_email(email))?;
                f(user);
                Some(())
            })
            .await
            .map(|updated| updated.is_some())
    }
}
