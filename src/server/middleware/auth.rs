//! Request authentication guard.
//!
//! `AuthGuard` resolves the session's user and checks role permissions before a
//! controller calls into the service layer.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// Only super admins may proceed.
    SuperAdmin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in, active user holding every permission in `permissions`.
    ///
    /// An empty slice only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - No user ID in the session
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user was deleted
    /// - `Err(AuthError::InactiveAccount)` - The user is deactivated
    /// - `Err(AuthError::AccessDenied)` - The user lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active() {
            return Err(AuthError::InactiveAccount(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::SuperAdmin => {
                    if !user.is_super_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a super admin action without the SUPER_ADMIN role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
