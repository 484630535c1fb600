use super::{Notification, View};
use crate::route::Route;
use yew_router::Routable;

/// Uses the window's native dialogs, and hands re-rendering back to whoever mounted the controller.
pub struct BrowserView {
	on_refresh: Box<dyn Fn()>,
}

impl BrowserView {
	pub fn new(on_refresh: impl Fn() + 'static) -> Self {
		Self {
			on_refresh: Box::new(on_refresh),
		}
	}
}

impl View for BrowserView {
	fn confirm(&self, prompt: &str) -> bool {
		gloo_utils::window().confirm_with_message(prompt).unwrap_or(false)
	}

	fn notify(&self, notification: Notification) {
		if let Notification::Error(class) = &notification {
			log::warn!(target: "view", "{class}");
		}
		let _ = gloo_utils::window().alert_with_message(notification.message());
	}

	fn navigate(&self, route: Route) {
		let _ = gloo_utils::window().location().assign(&route.to_path());
	}

	fn refresh(&self) {
		(self.on_refresh)();
	}
}
