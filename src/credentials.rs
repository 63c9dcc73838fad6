//! Client-side credential stores consulted by the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the auth token into either `localStorage` (durable,
//! "remember me") or `sessionStorage` (cleared with the tab). The guard only
//! asks whether a token is present; it never reads the value beyond that and
//! never writes to either store.
//!
//! TRADE-OFFS
//! ==========
//! Presence of any non-empty value counts as authenticated. There is no
//! expiry, format or signature check on the client.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StorageError;

/// Storage key the login flow writes the auth token under.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Capability answering whether the current browser holds an auth token.
pub trait CredentialStore {
    fn has_token(&self) -> bool;
}

/// Raw key-value read access to one client-side store.
pub trait TokenStorage {
    /// Read `key`, returning `Ok(None)` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be reached or read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Whether a stored value counts as a token.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Two-tier credential store: the durable tier is checked first, then the
/// session tier. A tier that fails to read counts as holding no token.
#[derive(Clone, Copy, Debug, Default)]
pub struct TieredCredentials<D, S> {
    durable: D,
    session: S,
}

impl<D, S> TieredCredentials<D, S> {
    pub fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}

impl<D: TokenStorage, S: TokenStorage> CredentialStore for TieredCredentials<D, S> {
    fn has_token(&self) -> bool {
        tier_has_token(&self.durable, StorageTier::Durable)
            || tier_has_token(&self.session, StorageTier::Session)
    }
}

fn tier_has_token(storage: &impl TokenStorage, tier: StorageTier) -> bool {
    match storage.read(AUTH_TOKEN_KEY) {
        Ok(value) => value.as_deref().is_some_and(is_present),
        Err(e) => {
            log::debug!("{tier:?} credential store unreadable, treating token as absent: {e}");
            false
        }
    }
}

/// Which browser store a [`BrowserStorage`] reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageTier {
    /// `window.localStorage`, survives browser restarts.
    Durable,
    /// `window.sessionStorage`, cleared when the tab session ends.
    Session,
}

/// [`TokenStorage`] over the browser's Web Storage.
///
/// The underlying `Storage` handle is resolved on every read so the value is
/// current at guard time and the handle itself is never held across renders.
/// Without the `csr` feature there is no browser, and every read reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    tier: StorageTier,
}

impl BrowserStorage {
    pub fn durable() -> Self {
        Self {
            tier: StorageTier::Durable,
        }
    }

    pub fn session() -> Self {
        Self {
            tier: StorageTier::Session,
        }
    }

    pub fn tier(&self) -> StorageTier {
        self.tier
    }
}

impl TokenStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or(StorageError::Unavailable)?;
            let storage = match self.tier {
                StorageTier::Durable => window.local_storage(),
                StorageTier::Session => window.session_storage(),
            }
            .map_err(|e| StorageError::Read(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
            storage
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Credentials backed by the browser's `localStorage` and `sessionStorage`.
pub type BrowserCredentials = TieredCredentials<BrowserStorage, BrowserStorage>;

/// Build the credential store the app injects into the guard.
pub fn browser_credentials() -> BrowserCredentials {
    TieredCredentials::new(BrowserStorage::durable(), BrowserStorage::session())
}

/// In-memory [`TokenStorage`] for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
    reads: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with an auth token.
    pub fn with_token(token: &str) -> Self {
        let storage = Self::new();
        storage.set(AUTH_TOKEN_KEY, token);
        storage
    }

    /// Storage whose reads always fail.
    pub fn failing() -> Self {
        let storage = Self::new();
        storage.set_failing(true);
        storage
    }

    pub fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of reads attempted so far, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.reads.set(self.reads.get() + 1);
        if self.failing.get() {
            return Err(StorageError::Read("storage disabled".to_owned()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }
}
