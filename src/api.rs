use crate::{error::ApiError, response::Envelope};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;
use serde_json::{Map, Value};
use std::rc::Rc;

pub mod auth;
mod http;
pub use http::*;

/// Which slot of a resource's operation set a request was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	List,
	ById,
	Create,
	Update,
	Delete,
	Auth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
	#[serde(skip)]
	pub operation: Operation,
	pub operation_name: &'static str,
	pub query: &'static str,
	pub variables: Map<String, Value>,
	/// Sent as `Authorization: JWT <token>`.
	#[serde(skip)]
	pub token: Option<String>,
}

impl GraphqlRequest {
	pub fn new(operation: Operation, operation_name: &'static str, query: &'static str) -> Self {
		Self {
			operation,
			operation_name,
			query,
			variables: Map::new(),
			token: None,
		}
	}

	pub fn with_variable(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.variables.insert(name.to_owned(), value.into());
		self
	}

	pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
		self.variables.extend(variables);
		self
	}

	pub fn with_token(mut self, token: &str) -> Self {
		self.token = Some(token.to_owned());
		self
	}
}

/// Moves one GraphQL request to the server and back.
pub trait Transport {
	fn execute(&self, request: GraphqlRequest) -> LocalBoxFuture<'_, Result<Envelope, ApiError>>;
}

/// Shared handle to the transport, cloned into every component that issues requests.
#[derive(Clone)]
pub struct Client(Rc<dyn Transport>);

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Client").finish_non_exhaustive()
	}
}

impl Client {
	pub fn new(transport: impl Transport + 'static) -> Self {
		Self(Rc::new(transport))
	}

	/// Sends the request and returns its `data` object, turning structured errors into [`ApiError::Protocol`].
	pub async fn send(&self, request: GraphqlRequest) -> Result<Map<String, Value>, ApiError> {
		let name = request.operation_name;
		log::debug!(target: "gateway", "dispatching {name}");
		let envelope = self.0.execute(request).await?;
		let data = envelope.into_data();
		if let Err(err) = &data {
			log::debug!(target: "gateway", "{name} failed: {err}");
		}
		data
	}
}
