use crate::{
	data::{RecordId, ResourceKind},
	response::InvalidJson,
};
use serde::Deserialize;

mod classify;
pub use classify::*;

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuredError {
	pub message: String,
	#[serde(default)]
	pub path: Vec<serde_json::Value>,
}

impl From<&str> for StructuredError {
	fn from(message: &str) -> Self {
		Self {
			message: message.to_owned(),
			path: Vec::new(),
		}
	}
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum ApiError {
	#[error("no session token is available")]
	SessionMissing,
	#[error("the server rejected the session token: {0}")]
	Unauthorized(String),
	#[error("transport failure: {0}")]
	Network(String),
	#[error("server rejected the request: {}", first_message(.0))]
	Protocol(Vec<StructuredError>),
	#[error("{kind} {id} does not exist")]
	NotFound { kind: ResourceKind, id: RecordId },
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("{0}")]
	Unknown(String),
	#[error("the request was cancelled")]
	Cancelled,
}

fn first_message(errors: &[StructuredError]) -> &str {
	errors.first().map(|err| err.message.as_str()).unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
	fn from(err: reqwest::Error) -> Self {
		// Decode failures come back as reqwest errors too, but only after a response arrived.
		if err.is_decode() {
			return Self::Unknown(err.to_string());
		}
		Self::Network(err.to_string())
	}
}

/// Required fields left empty in a draft. Never sent to the server.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("required fields are empty: {}", .missing.join(", "))]
pub struct ValidationError {
	pub missing: Vec<&'static str>,
}

impl ValidationError {
	/// Collects the names of every `(name, is_empty)` pair that is empty.
	pub fn check<const N: usize>(fields: [(&'static str, bool); N]) -> Result<(), Self> {
		let missing = fields
			.into_iter()
			.filter_map(|(name, empty)| empty.then_some(name))
			.collect::<Vec<_>>();
		match missing.is_empty() {
			true => Ok(()),
			false => Err(Self { missing }),
		}
	}
}
