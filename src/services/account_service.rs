use crate::dto::account_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::store::{Store, USERS_KEY};
use crate::utils::{crypto, time};
use tracing::info;
use uuid::Uuid;

/// Account directory over the `users` record.
#[derive(Clone)]
pub struct AccountService {
    store: Store,
}

impl AccountService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates an account. Usernames are unique with a case-sensitive exact
    /// match; the directory is left untouched when the name is taken.
    pub fn register(&self, payload: RegisterPayload) -> Result<User> {
        let mut users = self.load_users()?;

        if users.iter().any(|u| u.username == payload.username) {
            return Err(Error::DuplicateUsername(payload.username));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: payload.username,
            password_hash: crypto::hash_password(&payload.password)?,
            role: payload.role,
            created_at: time::now(),
        };

        users.push(user.clone());
        self.store.write(USERS_KEY, &users)?;
        info!(username = %user.username, role = ?user.role, "registered user");
        Ok(user)
    }

    /// Looks up an account by exact username and verifies the password.
    /// Unknown username and wrong password are indistinguishable to the
    /// caller: both are `InvalidCredentials`.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Result<User> {
        let user = self
            .find_by_username(username)?
            .ok_or(Error::InvalidCredentials)?;

        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }
        Ok(user)
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.load_users()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.store.read(USERS_KEY)?.unwrap_or_default())
    }
}
