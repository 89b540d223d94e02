use crate::model::user::UserDto;

/// Signed in user shared with every page through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the `/api/auth/user` request has completed, successful or not
    pub fetched: bool,
}
