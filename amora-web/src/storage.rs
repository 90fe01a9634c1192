//! Per-tab session storage.
//!
//! The browser implementation is backed by `sessionStorage`, so two tabs
//! hold two independent logins. Components never touch the browser store
//! directly; they go through [`Session`], which keeps the backing store
//! swappable for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{SessionStorage, Storage};

const USER_ID: &str = "userId";
const USER_EMAIL: &str = "userEmail";
const USER_NAME: &str = "userName";
const TEMP_EMAIL: &str = "tempEmail";
const TEMP_PASSWORD: &str = "tempPassword";
const USER_PROFILE: &str = "userProfile";
const USER_INTERESTS: &str = "userInterests";

/// Every key the session may hold. `clear` removes them all, including
/// signup leftovers from an abandoned flow.
const KNOWN_KEYS: [&str; 7] = [
    USER_ID,
    USER_EMAIL,
    USER_NAME,
    TEMP_EMAIL,
    TEMP_PASSWORD,
    USER_PROFILE,
    USER_INTERESTS,
];

/// Synchronous string key-value store scoped to the current tab.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove `key`; removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// `sessionStorage`-backed store. Values are written verbatim, not
/// JSON-encoded, so they stay readable from the devtools storage panel.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = SessionStorage::raw().set_item(key, value) {
            log::error!("session storage write failed for {key}: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = SessionStorage::raw().remove_item(key) {
            log::error!("session storage remove failed for {key}: {err:?}");
        }
    }
}

/// In-memory store standing in for `sessionStorage` outside the browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Named accessors over the per-tab session keys.
///
/// Cloning is cheap and every clone shares the same backend, so a clone
/// handed to a callback observes writes made elsewhere in the app.
#[derive(Clone)]
pub struct Session {
    backend: Rc<dyn StorageBackend>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl Default for Session {
    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }
}

impl Session {
    /// Create a session over an explicit backend.
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Identifier of the signed-in user.
    pub fn user_id(&self) -> Option<String> {
        self.backend.get(USER_ID)
    }

    pub fn set_user_id(&self, id: &str) {
        self.backend.set(USER_ID, id);
    }

    /// Email the user signed up or logged in with.
    pub fn user_email(&self) -> Option<String> {
        self.backend.get(USER_EMAIL)
    }

    pub fn set_user_email(&self, email: &str) {
        self.backend.set(USER_EMAIL, email);
    }

    /// Display name taken from the profile form.
    pub fn user_name(&self) -> Option<String> {
        self.backend.get(USER_NAME)
    }

    pub fn set_user_name(&self, name: &str) {
        self.backend.set(USER_NAME, name);
    }

    /// Email captured on the landing page, pending account creation.
    pub fn temp_email(&self) -> Option<String> {
        self.backend.get(TEMP_EMAIL)
    }

    pub fn set_temp_email(&self, email: &str) {
        self.backend.set(TEMP_EMAIL, email);
    }

    /// Password captured on the landing page, pending account creation.
    pub fn temp_password(&self) -> Option<String> {
        self.backend.get(TEMP_PASSWORD)
    }

    pub fn set_temp_password(&self, password: &str) {
        self.backend.set(TEMP_PASSWORD, password);
    }

    /// Last submitted profile, stored as JSON.
    pub fn user_profile(&self) -> Option<String> {
        self.backend.get(USER_PROFILE)
    }

    pub fn set_user_profile(&self, json: &str) {
        self.backend.set(USER_PROFILE, json);
    }

    /// Last submitted interest list, stored as JSON.
    pub fn user_interests(&self) -> Option<String> {
        self.backend.get(USER_INTERESTS)
    }

    pub fn set_user_interests(&self, json: &str) {
        self.backend.set(USER_INTERESTS, json);
    }

    /// Drop the transient signup credentials once the flow completes.
    pub fn remove_temp_credentials(&self) {
        self.backend.remove(TEMP_EMAIL);
        self.backend.remove(TEMP_PASSWORD);
    }

    /// Remove every known key. Used on logout.
    pub fn clear(&self) {
        for key in KNOWN_KEYS {
            self.backend.remove(key);
        }
    }

    /// True once a user identifier is stored.
    pub fn is_logged_in(&self) -> bool {
        self.user_id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_session() -> Session {
        Session::new(Rc::new(MemoryStorage::default()))
    }

    #[test]
    fn get_returns_none_for_absent_key() {
        let session = memory_session();
        assert_eq!(session.user_id(), None);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let session = memory_session();
        session.set_user_id("42");
        session.set_user_email("alice@example.com");
        session.set_user_name("Alice");
        assert_eq!(session.user_id().as_deref(), Some("42"));
        assert_eq!(session.user_email().as_deref(), Some("alice@example.com"));
        assert_eq!(session.user_name().as_deref(), Some("Alice"));
        assert!(session.is_logged_in());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let session = memory_session();
        session.set_user_id("1");
        session.set_user_id("2");
        assert_eq!(session.user_id().as_deref(), Some("2"));
    }

    #[test]
    fn remove_temp_credentials_leaves_other_keys() {
        let session = memory_session();
        session.set_temp_email("bob@example.com");
        session.set_temp_password("hunter2");
        session.set_user_id("7");
        session.set_user_email("bob@example.com");
        session.set_user_name("Bob");
        session.set_user_profile("{}");
        session.set_user_interests("[]");

        session.remove_temp_credentials();

        assert_eq!(session.temp_email(), None);
        assert_eq!(session.temp_password(), None);
        assert_eq!(session.user_id().as_deref(), Some("7"));
        assert_eq!(session.user_email().as_deref(), Some("bob@example.com"));
        assert_eq!(session.user_name().as_deref(), Some("Bob"));
        assert_eq!(session.user_profile().as_deref(), Some("{}"));
        assert_eq!(session.user_interests().as_deref(), Some("[]"));
    }

    #[test]
    fn clear_removes_every_known_key() {
        let session = memory_session();
        session.set_user_id("7");
        session.set_user_email("bob@example.com");
        session.set_user_name("Bob");
        session.set_temp_email("bob@example.com");
        session.set_temp_password("hunter2");
        session.set_user_profile("{\"name\":\"Bob\"}");
        session.set_user_interests("[\"Music\"]");

        session.clear();

        assert_eq!(session.user_id(), None);
        assert_eq!(session.user_email(), None);
        assert_eq!(session.user_name(), None);
        assert_eq!(session.temp_email(), None);
        assert_eq!(session.temp_password(), None);
        assert_eq!(session.user_profile(), None);
        assert_eq!(session.user_interests(), None);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn clear_on_empty_session_is_a_noop() {
        let session = memory_session();
        session.clear();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn clones_share_the_same_backend() {
        let session = memory_session();
        let clone = session.clone();
        clone.set_user_id("9");
        assert_eq!(session.user_id().as_deref(), Some("9"));
        assert_eq!(session, clone);
    }

    #[test]
    fn separate_sessions_do_not_share_state() {
        let first = memory_session();
        let second = memory_session();
        first.set_user_id("1");
        assert_eq!(second.user_id(), None);
        assert_ne!(first, second);
    }
}
