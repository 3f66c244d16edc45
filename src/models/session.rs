use crate::models::user::UserRole;
use serde::{Deserialize, Serialize};

/// Identity record persisted under the `currentUser` key while logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

/// In-memory session state, returned as a value from restore/login/logout.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated(CurrentUser),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user.role),
        }
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }
}
