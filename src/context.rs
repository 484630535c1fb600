use crate::{
	api::{Client, Transport},
	config::Config,
	data::Resource,
	gateway::Gateway,
	session::{SessionManager, SessionStore},
	view::{SharedView, View},
};
use derivative::Derivative;
use std::rc::Rc;

/// Everything a controller needs from the outside world, handed over explicitly instead of through globals.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Context {
	pub session: SessionManager,
	#[derivative(Debug = "ignore")]
	pub view: SharedView,
	match_all: Rc<str>,
}

impl Context {
	pub fn new(
		config: &Config,
		store: impl SessionStore + 'static,
		transport: impl Transport + 'static,
		view: impl View + 'static,
	) -> Self {
		let client = Client::new(transport);
		Self {
			session: SessionManager::new(store, client, config.auth.clone()),
			view: Rc::new(view),
			match_all: config.match_all.as_str().into(),
		}
	}

	/// Talks to the configured endpoint, keeps the session in `sessionStorage` and uses native dialogs.
	#[cfg(target_family = "wasm")]
	pub fn browser(config: &Config, on_refresh: impl Fn() + 'static) -> Self {
		use crate::{api::HttpTransport, session::BrowserSessionStore, view::BrowserView};
		Self::new(
			config,
			BrowserSessionStore,
			HttpTransport::new(config.endpoint.clone()),
			BrowserView::new(on_refresh),
		)
	}

	pub fn gateway<R: Resource>(&self) -> Gateway<R> {
		Gateway::new(self.session.client().clone(), self.match_all.clone())
	}
}
