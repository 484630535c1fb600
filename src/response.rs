use crate::error::{ApiError, StructuredError};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

/// The `{ data, errors }` body every GraphQL endpoint answers with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
	#[serde(default)]
	pub data: Option<Value>,
	#[serde(default)]
	pub errors: Option<Vec<StructuredError>>,
}

impl Envelope {
	pub fn data(data: Value) -> Self {
		Self {
			data: Some(data),
			errors: None,
		}
	}

	pub fn errors(errors: Vec<StructuredError>) -> Self {
		Self {
			data: None,
			errors: Some(errors),
		}
	}

	/// Decodes a raw HTTP reply.
	/// Rejected tokens surface as `Unauthorized`, carrying the server's message when one was sent.
	pub fn parse(status: u16, text: &str) -> Result<Self, ApiError> {
		let parsed = serde_json::from_str::<Self>(text);
		if status == 401 || status == 403 {
			let message = parsed
				.ok()
				.and_then(|envelope| envelope.errors)
				.and_then(|errors| errors.into_iter().next())
				.map(|err| err.message)
				.unwrap_or_else(|| format!("HTTP {status}"));
			return Err(ApiError::Unauthorized(message));
		}
		match parsed {
			Ok(envelope) => Ok(envelope),
			Err(_) if !(200..300).contains(&status) => Err(ApiError::Unknown(format!("HTTP {status}"))),
			Err(err) => Err(InvalidJson::new(text, &err).into()),
		}
	}

	/// Structured errors win over partial data.
	pub fn into_data(self) -> Result<Map<String, Value>, ApiError> {
		if let Some(errors) = self.errors {
			if !errors.is_empty() {
				return Err(ApiError::Protocol(errors));
			}
		}
		match self.data {
			Some(Value::Object(data)) => Ok(data),
			Some(other) => Err(ApiError::Unknown(format!("unexpected data payload: {other}"))),
			None => Err(ApiError::Unknown("response carried neither data nor errors".into())),
		}
	}
}

/// Pulls the value keyed by `field` out of a response's `data` object.
pub fn take_field<T>(data: &mut Map<String, Value>, field: &str) -> Result<T, ApiError>
where
	T: DeserializeOwned,
{
	let value = data.remove(field).unwrap_or(Value::Null);
	serde_json::from_value(value.clone()).map_err(|err| InvalidJson::new(&value.to_string(), &err).into())
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct InvalidJson {
	pub text: String,
	pub reason: String,
}
impl InvalidJson {
	pub fn new(text: &str, err: &serde_json::Error) -> Self {
		Self {
			text: text.to_owned(),
			reason: err.to_string(),
		}
	}
}
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {}", self.text, self.reason)
	}
}
