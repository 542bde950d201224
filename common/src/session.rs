//! Explicit session context.
//!
//! The bearer token lives in exactly one place behind a [`CredentialStore`].
//! The HTTP client and the route guard receive a [`Session`] handle instead of
//! reading browser storage themselves, so both see the same credential and
//! tests can swap the store for [`MemoryCredentialStore`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Backing storage of the single credential slot.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// In-memory store, used by tests and as a fallback when browser storage is unavailable.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Cheap-to-clone handle over the credential store.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Rc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryCredentialStore::default()))
    }

    /// Current token. Blank strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        self.store.save(token);
    }

    pub fn sign_out(&self) {
        self.store.remove();
    }

    /// Value of the `Authorization` header, if a credential is present.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_then_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.authorization_header(), None);

        session.sign_in("abc.def");
        assert!(session.is_authenticated());
        assert_eq!(session.authorization_header().as_deref(), Some("Bearer abc.def"));

        session.sign_out();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn blank_token_is_not_a_credential() {
        let session = Session::in_memory();
        session.sign_in("  ");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.sign_in("t");
        assert_eq!(other.token().as_deref(), Some("t"));
        assert_eq!(session, other);
        assert_ne!(session, Session::in_memory());
    }
}
