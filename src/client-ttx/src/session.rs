//! Session-scoped flag storage and the admin password gate.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::auth::AuthGateway;
use crate::errors::Error;

/// Key under which the admin-authenticated flag is stored.
pub const ADMIN_AUTH_KEY: &str = "ttx_admin_authenticated";
/// Key under which the visitor's cookie-consent choice is stored.
pub const COOKIE_CONSENT_KEY: &str = "ttx_cookie_consent";

/// Key-value store for session-scoped flags.
///
/// Abstracts the ambient browser storage the site keeps its auth and
/// consent flags in, so gated flows can run against a fake in tests
/// instead of reaching for a global.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

/// In-memory `SessionStore` for tests and native tooling.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut values) = self.values.lock() {
            values.clear();
        }
    }
}

/// Password gate in front of the admin dashboards.
///
/// Verification is delegated to the injected gateway; the gate only
/// records the outcome in the session store.
pub struct AdminGate<S: SessionStore, G: AuthGateway> {
    store: S,
    gateway: G,
}

impl<S: SessionStore, G: AuthGateway> AdminGate<S, G> {
    pub fn new(store: S, gateway: G) -> Self {
        Self { store, gateway }
    }

    /// Verifies the password and marks the session authenticated on
    /// success. A failed verification leaves the session untouched.
    pub async fn login(&self, password: &str) -> Result<(), Error> {
        self.gateway.verify_password(password).await?;
        self.store.set(ADMIN_AUTH_KEY, "true");
        Ok(())
    }

    /// True while the session holds a successful verification.
    pub fn is_authenticated(&self) -> bool {
        self.store.get(ADMIN_AUTH_KEY).as_deref() == Some("true")
    }

    /// Drops every session flag, ending the authenticated state.
    pub fn logout(&self) {
        self.store.clear();
    }
}

/// Records the visitor's cookie-consent choice.
pub fn set_cookie_consent<S: SessionStore>(store: &S, accepted: bool) {
    store.set(COOKIE_CONSENT_KEY, if accepted { "true" } else { "false" });
}

/// True when the visitor has accepted cookies.
pub fn has_cookie_consent<S: SessionStore>(store: &S) -> bool {
    store.get(COOKIE_CONSENT_KEY).as_deref() == Some("true")
}
