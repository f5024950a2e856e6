//! Credential handling and session token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use pqphub_auth::{JwtEncoder, PasswordHasher};
use pqphub_core::error::AppError;
use pqphub_core::result::AppResult;
use pqphub_database::repositories::UserRepository;
use pqphub_entity::user::{User, UserProfile, UserRole};

/// A signed-in account and its session token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Public view of the account.
    pub user: UserProfile,
    /// Signed session token.
    pub token: String,
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone)]
pub enum Registration {
    /// The account was created and signed in.
    Created(AuthSession),
    /// The email is already registered.
    AlreadyExists,
}

/// Outcome of [`AuthService::bootstrap_admin`].
#[derive(Debug, Clone)]
pub enum AdminBootstrap {
    /// A new admin account was created.
    Created(UserProfile),
    /// An existing account got a new password and the admin role.
    Promoted(UserProfile),
}

/// Registers users, checks credentials, and issues session tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    users: UserRepository,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(users: UserRepository, hasher: Arc<PasswordHasher>, encoder: Arc<JwtEncoder>) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Create a regular account and sign it in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<Registration> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email/password required"));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Ok(Registration::AlreadyExists);
        }

        let hash = self.hasher.hash_password(password)?;
        let user = User::new(name.trim(), email, hash, UserRole::User);
        let Some(user) = self.users.create(user).await? else {
            return Ok(Registration::AlreadyExists);
        };

        info!(user_id = %user.id, email = %user.email, "User registered");
        self.session_for(&user).map(Registration::Created)
    }

    /// Verify credentials and sign the account in.
    ///
    /// Unknown email and wrong password fail identically, and both pay for
    /// one Argon2 verification.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let user = self.users.find_by_email(email).await?;
        let verified = match &user {
            Some(user) => self.hasher.verify_password(password, &user.password_hash)?,
            None => self.hasher.verify_decoy(password)?,
        };

        match user {
            Some(user) if verified => {
                info!(user_id = %user.id, "User logged in");
                self.session_for(&user)
            }
            _ => {
                warn!(email = %email.trim(), "Failed login attempt");
                Err(AppError::authentication("Invalid credentials"))
            }
        }
    }

    /// All accounts, without credentials.
    pub async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        Ok(self.users.find_all().await?.iter().map(UserProfile::from).collect())
    }

    /// Grant the admin role. Returns `false` if no such email.
    pub async fn promote(&self, email: &str) -> AppResult<bool> {
        let promoted = self.users.set_role_by_email(email, UserRole::Admin).await?;
        if promoted {
            info!(email = %email.trim(), "User promoted to admin");
        }
        Ok(promoted)
    }

    /// Create an admin account, or reset an existing one's password and
    /// promote it.
    pub async fn bootstrap_admin(&self, name: &str, email: &str, password: &str) -> AppResult<AdminBootstrap> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email/password required"));
        }
        let hash = self.hasher.hash_password(password)?;

        if self.users.find_by_email(email).await?.is_none() {
            let user = User::new(name.trim(), email, hash.clone(), UserRole::Admin);
            if let Some(user) = self.users.create(user).await? {
                info!(user_id = %user.id, email = %user.email, "Admin user created");
                return Ok(AdminBootstrap::Created(UserProfile::from(&user)));
            }
        }

        self.users.set_password_by_email(email, &hash).await?;
        self.users.set_role_by_email(email, UserRole::Admin).await?;
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::internal("Admin account vanished during bootstrap"))?;
        info!(user_id = %user.id, email = %user.email, "Existing user promoted to admin");
        Ok(AdminBootstrap::Promoted(UserProfile::from(&user)))
    }

    fn session_for(&self, user: &User) -> AppResult<AuthSession> {
        Ok(AuthSession {
            user: UserProfile::from(user),
            token: self.encoder.issue(user)?,
        })
    }
}
