use crate::error::ApiError;
use futures::future::{AbortHandle, Abortable};
use std::{
	cell::{Cell, RefCell},
	collections::HashMap,
	future::Future,
	rc::{Rc, Weak},
};

type Pending = RefCell<HashMap<u64, AbortHandle>>;

/// Every call a view issues while it is active. Deactivating the view aborts whatever is still pending.
/// Calls leave the scope as soon as they finish, so only in-flight calls are held.
#[derive(Debug, Default)]
pub struct ActivationScope {
	next_key: Cell<u64>,
	pending: Rc<Pending>,
}

/// Removes its call from the scope once the call finishes or is dropped.
struct Registration {
	key: u64,
	pending: Weak<Pending>,
}

impl Drop for Registration {
	fn drop(&mut self) {
		if let Some(pending) = self.pending.upgrade() {
			pending.borrow_mut().remove(&self.key);
		}
	}
}

impl ActivationScope {
	/// Registers `future` immediately, so cancelling before the first poll also counts.
	/// Resolves to [`ApiError::Cancelled`] if the scope is cancelled before `future` finishes.
	pub fn run<F, T>(&self, future: F) -> impl Future<Output = Result<T, ApiError>>
	where
		F: Future<Output = Result<T, ApiError>>,
	{
		let key = self.next_key.get();
		self.next_key.set(key.wrapping_add(1));
		let (handle, abort_registration) = AbortHandle::new_pair();
		self.pending.borrow_mut().insert(key, handle);
		let registration = Registration {
			key,
			pending: Rc::downgrade(&self.pending),
		};
		async move {
			let result = Abortable::new(future, abort_registration).await;
			drop(registration);
			match result {
				Ok(result) => result,
				Err(_aborted) => Err(ApiError::Cancelled),
			}
		}
	}

	/// Number of calls still in flight.
	pub fn pending(&self) -> usize {
		self.pending.borrow().len()
	}

	pub fn cancel_all(&self) {
		let handles = std::mem::take(&mut *self.pending.borrow_mut());
		if !handles.is_empty() {
			log::debug!(target: "scope", "cancelling {} pending call(s)", handles.len());
		}
		for handle in handles.into_values() {
			handle.abort();
		}
	}
}

impl Drop for ActivationScope {
	fn drop(&mut self) {
		self.cancel_all();
	}
}
