use crate::api::auth::Credentials;
use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub static DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql/";
/// What list queries with a mandatory `search` argument send when the caller gives no filter.
pub static MATCH_ALL: &str = "*";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
	pub endpoint: Url,
	pub match_all: String,
	pub auth: AuthConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
	/// Ask `tokenAuth` for a long-lived refresh token and keep it in the session.
	pub refresh_tokens: bool,
	pub auto_login: AutoLogin,
}

/// How a view recovers a session silently when the tab has no token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum AutoLogin {
	#[default]
	Disabled,
	RefreshToken,
	/// Runtime-provided account, for kiosk or demo deployments.
	Credentials(Credentials),
}

impl Default for Config {
	fn default() -> Self {
		Self {
			endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
			match_all: MATCH_ALL.to_owned(),
			auth: AuthConfig::default(),
		}
	}
}

impl Config {
	pub fn from_json(text: &str) -> anyhow::Result<Self> {
		let config = serde_json::from_str::<Self>(text).context("failed to parse client configuration")?;
		if config.endpoint.cannot_be_a_base() {
			anyhow::bail!("endpoint {} is not an http(s) url", config.endpoint);
		}
		Ok(config)
	}
}
