//! Email and password authentication.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Service verifying login credentials.
///
/// Session handling stays in the controller; this service only decides whether the
/// credentials identify an active user.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email and password pair.
    ///
    /// The email is trimmed and lower-cased before lookup. The password is checked before
    /// the account status so an inactive account is only revealed to someone who knows
    /// its password.
    ///
    /// # Arguments
    /// - `email` - Login email in any case
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid and the account is active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::InactiveAccount)` - Valid credentials for an inactive account
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active() {
            return Err(AuthError::InactiveAccount(user.id).into());
        }

        Ok(user)
    }
}
