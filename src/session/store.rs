use std::{cell::RefCell, collections::HashMap};

/// Key/value storage that lives exactly as long as the browser tab.
pub trait SessionStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str);
	fn delete(&self, key: &str);
}

/// Backed by `window.sessionStorage`.
#[cfg(target_family = "wasm")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

#[cfg(target_family = "wasm")]
impl SessionStore for BrowserSessionStore {
	fn get(&self, key: &str) -> Option<String> {
		use gloo_storage::{SessionStorage, Storage};
		SessionStorage::raw().get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		use gloo_storage::{SessionStorage, Storage};
		if let Err(err) = SessionStorage::raw().set_item(key, value) {
			log::error!(target: "session", "failed to persist {key:?}: {err:?}");
		}
	}

	fn delete(&self, key: &str) {
		use gloo_storage::{SessionStorage, Storage};
		SessionStorage::delete(key);
	}
}

#[derive(Debug, Default)]
pub struct MemorySessionStore(RefCell<HashMap<String, String>>);

impl SessionStore for MemorySessionStore {
	fn get(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
	}

	fn delete(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}
}
