//! User registration and credential login.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::auth::{self, AuthConfig};
use crate::entities::user::SafeUser;
use crate::errors::ServiceError;
use crate::storage::Storage;

#[derive(Clone)]
pub struct UserService {
    storage: Arc<dyn Storage>,
    auth_config: AuthConfig,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>, auth_config: AuthConfig) -> Self {
        Self {
            storage,
            auth_config,
        }
    }

    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<SafeUser, ServiceError> {
        let hash = auth::hash_password(password)?;
        let user = self.storage.create_user(username, &hash).await?;
        info!(user_id = user.id, "user created");
        Ok(user.into())
    }

    /// Unknown usernames and wrong passwords fail identically so the
    /// endpoint does not reveal which usernames exist.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, SafeUser), ServiceError> {
        let invalid = || ServiceError::AuthError("invalid username or password".to_string());

        let Some(user) = self.storage.find_user_by_username(username).await? else {
            warn!("login attempt for unknown user");
            return Err(invalid());
        };
        if !auth::verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "login attempt with wrong password");
            return Err(invalid());
        }

        let token = auth::issue_token(&self.auth_config, user.id, &user.username)?;
        Ok((token, user.into()))
    }
}
