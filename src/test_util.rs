use crate::{
	api::{Client, GraphqlRequest, Transport},
	config::Config,
	context::Context,
	error::ApiError,
	response::Envelope,
	route::Route,
	session::{MemorySessionStore, Token},
	view::{Notification, View},
};
use futures::channel::oneshot;
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value};
use std::{
	cell::{Cell, RefCell},
	collections::{HashMap, VecDeque},
	rc::Rc,
};

pub use futures::executor::block_on;

pub type Reply = Result<Envelope, ApiError>;

enum Scripted {
	Ready(Reply),
	Held(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct Replies {
	queue: VecDeque<Scripted>,
	// The last reply has been served at least once and may be replaced.
	spent: bool,
}

#[derive(Default)]
struct Script {
	replies: HashMap<&'static str, Replies>,
	requests: Vec<GraphqlRequest>,
}

impl Script {
	// Replies are served in order. The last ready reply repeats until another is scripted.
	fn next(&mut self, name: &str) -> Scripted {
		let unscripted = || Scripted::Ready(Err(ApiError::Unknown(format!("no reply scripted for {name}"))));
		let Some(replies) = self.replies.get_mut(name) else {
			return unscripted();
		};
		if replies.queue.len() == 1 {
			if let Some(Scripted::Ready(reply)) = replies.queue.front() {
				replies.spent = true;
				return Scripted::Ready(reply.clone());
			}
		}
		replies.queue.pop_front().unwrap_or_else(unscripted)
	}

	fn push(&mut self, name: &'static str, reply: Scripted) {
		let replies = self.replies.entry(name).or_default();
		if replies.spent {
			replies.queue.clear();
			replies.spent = false;
		}
		replies.queue.push_back(reply);
	}
}

/// Scripted transport keyed by operation name. Records every request it sees.
#[derive(Clone, Default)]
pub struct MockTransport(Rc<RefCell<Script>>);

impl MockTransport {
	pub fn client(&self) -> Client {
		Client::new(self.clone())
	}

	pub fn respond(&self, operation: &'static str, data: Value) {
		self.push(operation, Scripted::Ready(Ok(Envelope::data(data))));
	}

	pub fn fail(&self, operation: &'static str, err: ApiError) {
		self.push(operation, Scripted::Ready(Err(err)));
	}

	/// The next call to `operation` stays pending until the returned sender fires.
	pub fn hold(&self, operation: &'static str) -> oneshot::Sender<Reply> {
		let (sender, receiver) = oneshot::channel();
		self.push(operation, Scripted::Held(receiver));
		sender
	}

	pub fn requests(&self) -> Vec<GraphqlRequest> {
		self.0.borrow().requests.clone()
	}

	pub fn operation_names(&self) -> Vec<&'static str> {
		self.0.borrow().requests.iter().map(|request| request.operation_name).collect()
	}

	fn push(&self, operation: &'static str, reply: Scripted) {
		self.0.borrow_mut().push(operation, reply);
	}
}

impl Transport for MockTransport {
	fn execute(&self, request: GraphqlRequest) -> LocalBoxFuture<'_, Result<Envelope, ApiError>> {
		let scripted = {
			let mut script = self.0.borrow_mut();
			let scripted = script.next(request.operation_name);
			script.requests.push(request);
			scripted
		};
		Box::pin(async move {
			match scripted {
				Scripted::Ready(reply) => reply,
				Scripted::Held(receiver) => receiver
					.await
					.unwrap_or_else(|_| Err(ApiError::Unknown("held reply was dropped".into()))),
			}
		})
	}
}

/// `{ field: value }`, for scripting replies whose key is only known at runtime.
pub fn keyed(field: &str, value: Value) -> Value {
	let mut data = Map::new();
	data.insert(field.to_owned(), value);
	Value::Object(data)
}

/// Records everything a controller asks of the visual layer.
#[derive(Default)]
pub struct MockView {
	pub decline: Cell<bool>,
	pub prompts: RefCell<Vec<String>>,
	pub notifications: RefCell<Vec<Notification>>,
	pub navigations: RefCell<Vec<Route>>,
	pub refreshes: Cell<usize>,
}

impl MockView {
	pub fn notifications(&self) -> Vec<Notification> {
		self.notifications.borrow().clone()
	}

	pub fn navigations(&self) -> Vec<Route> {
		self.navigations.borrow().clone()
	}
}

impl View for MockView {
	fn confirm(&self, prompt: &str) -> bool {
		self.prompts.borrow_mut().push(prompt.to_owned());
		!self.decline.get()
	}

	fn notify(&self, notification: Notification) {
		self.notifications.borrow_mut().push(notification);
	}

	fn navigate(&self, route: Route) {
		self.navigations.borrow_mut().push(route);
	}

	fn refresh(&self) {
		self.refreshes.set(self.refreshes.get() + 1);
	}
}

/// A context over a fresh in-memory session, with the view kept inspectable.
pub fn context(transport: &MockTransport, config: &Config) -> (Context, Rc<MockView>) {
	let view = Rc::new(MockView::default());
	let context = Context::new(config, MemorySessionStore::default(), transport.clone(), view.clone());
	(context, view)
}

/// Same as [`context`], already holding `token`.
pub fn signed_in(transport: &MockTransport, token: &str) -> (Context, Rc<MockView>) {
	let (context, view) = context(transport, &Config::default());
	context.session.set_session(Token(token.to_owned()));
	(context, view)
}
