use crate::{error::Classification, route::Route};
use std::rc::Rc;

#[cfg(target_family = "wasm")]
mod browser;
#[cfg(target_family = "wasm")]
pub use browser::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
	Success(String),
	Error(Classification),
}

impl Notification {
	pub fn message(&self) -> &str {
		match self {
			Self::Success(message) => message.as_str(),
			Self::Error(class) => class.message(),
		}
	}
}

/// The visual layer, as seen by controllers. Controllers never render; they ask.
pub trait View {
	/// Blocking yes/no decision from the user.
	fn confirm(&self, prompt: &str) -> bool;
	fn notify(&self, notification: Notification);
	fn navigate(&self, route: Route);
	/// State the view reads from has changed.
	fn refresh(&self);
}

pub type SharedView = Rc<dyn View>;

impl<V: View + ?Sized> View for Rc<V> {
	fn confirm(&self, prompt: &str) -> bool {
		(**self).confirm(prompt)
	}

	fn notify(&self, notification: Notification) {
		(**self).notify(notification)
	}

	fn navigate(&self, route: Route) {
		(**self).navigate(route)
	}

	fn refresh(&self) {
		(**self).refresh()
	}
}
