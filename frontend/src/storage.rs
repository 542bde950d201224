//! `localStorage` access: the credential slot behind the session and the
//! theme preference.

use std::rc::Rc;

use common::session::{CredentialStore, MemoryCredentialStore, Session};
use common::theme::Theme;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Credential store over one `localStorage` key.
pub struct LocalCredentialStore {
    key: String,
}

impl CredentialStore for LocalCredentialStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(&self.key).ok().flatten())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// Session backed by `localStorage`, or by memory when storage is blocked.
pub fn browser_session(key: &str) -> Session {
    if local_storage().is_some() {
        Session::new(Rc::new(LocalCredentialStore { key: key.to_string() }))
    } else {
        gloo_console::warn!("localStorage no disponible; la sesión no se conservará");
        Session::new(Rc::new(MemoryCredentialStore::default()))
    }
}

pub fn load_theme(key: &str) -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(key).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(key: &str, theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, theme.as_str());
    }
}

/// Sets the `dark` class on the root element to match `theme`.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }
}
