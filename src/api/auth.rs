//! Authentication Stubs
//!
//! The backend exposes `GET /login` and `POST /signup`, but neither
//! establishes a session the client can observe: no token or cookie
//! comes back, and login does not even transmit the credentials the form
//! collected. Success means only that the request did not reject, after
//! which a caller navigates on. This is a known gap in the backend
//! contract, kept entirely out of the synchronization controller; real
//! authentication would be a separate collaborator's job.

use serde::Serialize;

use super::client::check;
use crate::config::Config;
use crate::error::SyncResult;

/// Signup form fields, submitted as typed
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// "Log in": confirm the backend answers at all.
///
/// No credentials are sent; the route takes none.
pub async fn login(http: &reqwest::Client, config: &Config) -> SyncResult<()> {
    let url = format!("{}/login", config.base_url);
    check(http.get(url).send().await?).await?;
    Ok(())
}

/// Register a new account
pub async fn signup(http: &reqwest::Client, config: &Config, form: &SignupForm) -> SyncResult<()> {
    let url = format!("{}/signup", config.base_url);
    check(http.post(url).json(form).send().await?).await?;
    Ok(())
}
