//! Login coordination and session state.
//!
//! `Session` owns the API client and the in-memory session state:
//! the cached credentials, the fetched profile, and a flag recording
//! whether the most recent login attempt failed.
//!
//! Invariant: `profile` is `Some` only if `credentials` is `Some` and
//! the most recent verification succeeded. "Is authenticated" means
//! the profile is present.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::models::User;

use super::Credentials;

pub struct Session {
    client: ApiClient,
    credentials: Option<Credentials>,
    profile: Option<User>,
    login_failed: bool,
    logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an empty session around an unauthenticated client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            credentials: None,
            profile: None,
            login_failed: false,
            logged_in_at: None,
        }
    }

    /// Log in with the given credentials.
    ///
    /// Three sequential steps:
    /// 1. Verify the credentials against the secured endpoint.
    /// 2. Cache them and swap in a credentialed client, so every
    ///    subsequent request carries Basic auth.
    /// 3. Fetch the current user's profile with the credentialed client.
    ///
    /// On success the profile is returned and the failure flag cleared.
    /// On failure at any step the failure flag is set and the error is
    /// propagated to the caller; prior session state is left as it was,
    /// except that a step-3 failure leaves the freshly verified
    /// credentials cached without a profile. Matching the original
    /// client, such a session is still unauthenticated until a later
    /// login completes.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<User> {
        match self.try_login(username, password).await {
            Ok(profile) => {
                self.login_failed = false;
                info!(username, "Login succeeded");
                Ok(profile)
            }
            Err(e) => {
                self.login_failed = true;
                warn!(username, error = %e, "Login failed");
                Err(e)
            }
        }
    }

    async fn try_login(&mut self, username: &str, password: &str) -> Result<User> {
        self.client
            .get_secured(username, password)
            .await
            .context("Credential verification failed")?;

        let creds = Credentials::new(username, password);
        self.client = self.client.with_credentials(creds.clone());
        self.credentials = Some(creds);

        let profile = self
            .client
            .get_current_user()
            .await
            .context("Identity fetch failed after verification")?;

        self.profile = Some(profile.clone());
        self.logged_in_at = Some(Utc::now());
        Ok(profile)
    }

    /// Whether the session holds a verified profile.
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// The profile of the logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    /// Whether the most recent login attempt failed.
    pub fn login_failed(&self) -> bool {
        self.login_failed
    }

    /// Whether credentials are cached for outgoing requests.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// When the current profile was fetched, if logged in.
    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }

    /// The API client, credentialed once a login has verified.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
