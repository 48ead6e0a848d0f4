use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::resources::auth;
use crate::types::{NewUser, UserProfile};

/// Auth session lifecycle.
///
/// The persisted token is the only durable artifact; the profile is
/// re-derived from `/auth/me` on every load. There is no intermediate
/// "token accepted but profile unknown" resting state: a failed profile
/// fetch discards the token and lands back in `Unauthenticated`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    /// A persisted token exists; identity not yet confirmed.
    Loading,
    Authenticated(UserProfile),
}

pub struct AuthSession {
    gateway: Arc<HttpGateway>,
    state: SessionState,
}

impl AuthSession {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        let state = if gateway.tokens().get().is_some() {
            SessionState::Loading
        } else {
            SessionState::Unauthenticated
        };
        Self { gateway, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Confirm a persisted token at application start. Without a token
    /// this settles immediately in `Unauthenticated`.
    pub async fn initialize(&mut self) -> &SessionState {
        if self.gateway.tokens().get().is_none() {
            self.state = SessionState::Unauthenticated;
            return &self.state;
        }

        self.state = SessionState::Loading;
        match auth::me(&self.gateway).await {
            Ok(profile) => {
                info!(user = %profile.email, "session restored from persisted token");
                self.state = SessionState::Authenticated(profile);
            }
            Err(err) => {
                warn!(error = %err, "persisted token rejected, clearing it");
                self.gateway.tokens().clear();
                self.state = SessionState::Unauthenticated;
            }
        }
        &self.state
    }

    /// Exchange credentials for a token, persist it, then confirm the
    /// profile. Any failure along the way discards the token and
    /// propagates the error.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let token = auth::login(&self.gateway, email, password).await?;
        self.gateway.tokens().set(&token.access_token);

        match auth::me(&self.gateway).await {
            Ok(profile) => {
                info!(user = %profile.email, "login ok");
                self.state = SessionState::Authenticated(profile.clone());
                Ok(profile)
            }
            Err(err) => {
                warn!(error = %err, "profile fetch failed after login, rolling back");
                self.gateway.tokens().clear();
                self.state = SessionState::Unauthenticated;
                Err(err)
            }
        }
    }

    /// Clear the token and reset. Returning the user to the login view
    /// is the router's job, reacting to the state change.
    pub fn logout(&mut self) {
        self.gateway.tokens().clear();
        self.state = SessionState::Unauthenticated;
        info!("session cleared");
    }

    /// Create the account, then log straight in with the same
    /// credentials.
    pub async fn register(&mut self, user: &NewUser) -> Result<UserProfile, ApiError> {
        auth::register(&self.gateway, user).await?;
        self.login(&user.email, &user.password).await
    }
}
