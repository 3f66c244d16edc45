use crate::error::Result;
use crate::models::session::{CurrentUser, Session};
use crate::models::user::User;
use crate::store::{Store, CURRENT_USER_KEY};
use tracing::info;

/// Session lifecycle over the persisted `currentUser` record. Sessions are
/// plain values; callers hold on to whatever the last transition returned.
#[derive(Clone)]
pub struct SessionService {
    store: Store,
}

impl SessionService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Startup rehydration: absent or malformed identity records yield an
    /// anonymous session (the store clears malformed records on read).
    ///
    /// The identity is NOT re-checked against the account directory, so an
    /// account removed out from under a stored session still authenticates.
    pub fn restore(&self) -> Result<Session> {
        match self.store.read::<CurrentUser>(CURRENT_USER_KEY)? {
            Some(user) => Ok(Session::Authenticated(user)),
            None => Ok(Session::Anonymous),
        }
    }

    pub fn login(&self, user: &User) -> Result<Session> {
        let current = CurrentUser {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        };
        self.store.write(CURRENT_USER_KEY, &current)?;
        info!(username = %current.username, role = ?current.role, "logged in");
        Ok(Session::Authenticated(current))
    }

    pub fn logout(&self) -> Result<Session> {
        self.store.remove(CURRENT_USER_KEY)?;
        info!("logged out");
        Ok(Session::Anonymous)
    }
}
