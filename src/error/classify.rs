use super::ApiError;

pub static NETWORK_MESSAGE: &str = "Cannot reach the server. Check your connection and try again.";
pub static UNKNOWN_MESSAGE: &str = "An unknown error occurred.";

/// The user-facing category of a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
	/// No response made it back from the server.
	Network,
	/// The server (or client-side validation) rejected the request with a readable message.
	Protocol(String),
	Unknown,
}

impl Classification {
	pub fn message(&self) -> &str {
		match self {
			Self::Network => NETWORK_MESSAGE,
			Self::Protocol(message) => message.as_str(),
			Self::Unknown => UNKNOWN_MESSAGE,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Network => "network",
			Self::Protocol(_) => "protocol",
			Self::Unknown => "unknown",
		}
	}
}

impl std::fmt::Display for Classification {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.label(), self.message())
	}
}

/// Maps any failure onto the three categories shown to the user.
pub fn classify(error: &ApiError) -> Classification {
	match error {
		ApiError::Network(_) => Classification::Network,
		ApiError::Protocol(errors) => match errors.first() {
			Some(first) => Classification::Protocol(first.message.clone()),
			None => Classification::Unknown,
		},
		ApiError::Unauthorized(message) => Classification::Protocol(message.clone()),
		ApiError::Validation(err) => Classification::Protocol(err.to_string()),
		ApiError::NotFound { .. } | ApiError::SessionMissing => Classification::Protocol(error.to_string()),
		ApiError::InvalidJson(_) | ApiError::Unknown(_) | ApiError::Cancelled => Classification::Unknown,
	}
}
