use crate::model::user::UserDto;

/// Session user shared through context.
///
/// `fetched` flips to true once the initial `/api/auth/me` request resolves, so
/// protected layouts can tell "not logged in" apart from "not known yet".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }
}
