//! Permission checks
//!
//! [`PermissionHandler`] holds its own session, independent from the one of
//! [`SharePointClient`](crate::application::client::SharePointClient), so
//! permission probes never share connection state with data operations.

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::error::AppError;
use tracing::info;

/// Authenticated handle reserved for permission checks
pub struct PermissionHandler {
    session: Session,
}

impl PermissionHandler {
    /// Creates a handler with a dedicated session
    pub fn new(config: &Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            session: Session::new(config)?,
        })
    }

    /// Returns `true` iff the site answers the probe with 200
    pub async fn authenticate(&self) -> Result<bool, AppError> {
        let authenticated = self.session.authenticate().await?;
        info!(
            "Permission session for {} authenticated: {}",
            self.session.user(),
            authenticated
        );
        Ok(authenticated)
    }
}
