// services/web-dash/src/auth.rs
//
// Session signals over the apikit auth state machine
//

use std::rc::Rc;
use std::sync::Arc;

use leptos::*;

use apikit::gateway::http::HttpGateway;
use apikit::types::NewUser;
use apikit::{AuthSession, PharmClient, SessionState};

/// Reactive handle on the auth session.
///
/// The browser token store is the durable substrate; each operation
/// runs a fresh [`AuthSession`] over the shared gateway and mirrors the
/// outcome into the `state` signal, so the router and header react
/// without any module-level singleton.
#[derive(Clone)]
pub struct Auth {
    gateway: Arc<HttpGateway>,
    pub state: RwSignal<SessionState>,
    /// Last login/register failure, for form-level display.
    pub error: RwSignal<Option<String>>,
}

impl Auth {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        let session = AuthSession::new(gateway.clone());
        Self {
            gateway,
            state: create_rw_signal(session.state().clone()),
            error: create_rw_signal(None),
        }
    }

    /// Confirm a persisted token at mount. Settles in Unauthenticated
    /// immediately when no token exists.
    pub fn initialize(&self) {
        let gateway = self.gateway.clone();
        let state = self.state;
        spawn_local(async move {
            let mut session = AuthSession::new(gateway);
            state.set(session.state().clone());
            session.initialize().await;
            state.set(session.state().clone());
        });
    }

    pub fn login(&self, email: String, password: String) {
        let gateway = self.gateway.clone();
        let state = self.state;
        let error = self.error;
        error.set(None);
        state.set(SessionState::Loading);
        spawn_local(async move {
            let mut session = AuthSession::new(gateway);
            match session.login(&email, &password).await {
                Ok(_) => state.set(session.state().clone()),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    state.set(SessionState::Unauthenticated);
                }
            }
        });
    }

    pub fn register(&self, user: NewUser) {
        let gateway = self.gateway.clone();
        let state = self.state;
        let error = self.error;
        error.set(None);
        state.set(SessionState::Loading);
        spawn_local(async move {
            let mut session = AuthSession::new(gateway);
            match session.register(&user).await {
                Ok(_) => state.set(session.state().clone()),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    state.set(SessionState::Unauthenticated);
                }
            }
        });
    }

    /// Clears the stored token; the router reacts to the state change
    /// and lands back on the login view.
    pub fn logout(&self) {
        let mut session = AuthSession::new(self.gateway.clone());
        session.logout();
        self.state.set(SessionState::Unauthenticated);
    }
}

pub fn use_auth() -> Auth {
    expect_context::<Auth>()
}

pub fn use_client() -> Rc<PharmClient> {
    expect_context::<Rc<PharmClient>>()
}
