use std::sync::Arc;

use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Account operations backing the login and registration actions.
///
/// Coordinates the credential hasher with the user repository. Session
/// issuance is the session service's job; this service only answers
/// "who is this" questions.
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    /// Create a new account service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Validated username, email, and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed (fatal, propagates)
    /// * `DatabaseError` - Database operation failed
    pub async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "Account registered");

        Ok(created)
    }

    /// Verify credentials for login.
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` error so the response cannot be used to
    /// probe which emails are registered.
    ///
    /// # Arguments
    /// * `email` - Normalized email address
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// The user entity when the credentials match
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user, or password mismatch
    /// * `DatabaseError` - Database operation failed
    pub async fn login(&self, email: &EmailAddress, password: &str) -> Result<User, UserError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Err(UserError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
