use crate::{
	api::{
		auth::{Account, CreateUser, Credentials, FetchCurrentUser, IssuedToken, NewUser, TokenAuth},
		Client,
	},
	config::AuthConfig,
	error::ApiError,
};
use derivative::Derivative;
use std::rc::Rc;

mod silent;
mod store;
pub use store::*;

/// Snapshot of what the tab knows about the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
	pub token: Option<String>,
	pub username: Option<String>,
}

pub trait SessionValue: Sized {
	fn id() -> &'static str;
	fn from_raw(raw: String) -> Self;
	fn as_raw(&self) -> &str;

	fn load(store: &dyn SessionStore) -> Option<Self> {
		store.get(Self::id()).map(Self::from_raw)
	}

	fn apply_to_session(self, store: &dyn SessionStore) {
		store.set(Self::id(), self.as_raw());
	}

	fn delete(store: &dyn SessionStore) {
		store.delete(Self::id());
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token(pub String);
impl SessionValue for Token {
	fn id() -> &'static str {
		"token"
	}

	fn from_raw(raw: String) -> Self {
		Self(raw)
	}

	fn as_raw(&self) -> &str {
		&self.0
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Username(pub String);
impl SessionValue for Username {
	fn id() -> &'static str {
		"user"
	}

	fn from_raw(raw: String) -> Self {
		Self(raw)
	}

	fn as_raw(&self) -> &str {
		&self.0
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken(pub String);
impl SessionValue for RefreshToken {
	fn id() -> &'static str {
		"refresh_token"
	}

	fn from_raw(raw: String) -> Self {
		Self(raw)
	}

	fn as_raw(&self) -> &str {
		&self.0
	}
}

/// The ambient authentication context. Cloned into every controller that issues requests.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct SessionManager {
	#[derivative(Debug = "ignore")]
	store: Rc<dyn SessionStore>,
	client: Client,
	auth: AuthConfig,
}

impl SessionManager {
	pub fn new(store: impl SessionStore + 'static, client: Client, auth: AuthConfig) -> Self {
		Self {
			store: Rc::new(store),
			client,
			auth,
		}
	}

	pub fn client(&self) -> &Client {
		&self.client
	}

	pub fn get_token(&self) -> Option<String> {
		Token::load(&*self.store).map(|token| token.0).filter(|token| !token.is_empty())
	}

	pub fn set_session<V: SessionValue>(&self, value: V) {
		value.apply_to_session(&*self.store);
	}

	pub fn session(&self) -> Session {
		Session {
			token: self.get_token(),
			username: Username::load(&*self.store).map(|user| user.0),
		}
	}

	/// Exchanges credentials for a token. Nothing is persisted unless the server accepts them.
	pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
		let issued = match TokenAuth::send(&self.client, credentials, self.auth.refresh_tokens).await {
			Ok(issued) => issued,
			Err(err) => {
				log::error!(target: "session", "login for {:?} failed: {err}", credentials.username);
				return Err(err);
			}
		};
		self.set_session(Username(credentials.username.clone()));
		self.apply_issued(issued);
		log::info!(target: "session", "logged in as {:?}", credentials.username);
		Ok(self.session())
	}

	/// Creates the account, then signs straight into it.
	pub async fn sign_up(&self, user: &NewUser) -> Result<Session, ApiError> {
		let account = CreateUser::send(&self.client, user).await?;
		log::info!(target: "session", "created account {} ({:?})", account.id, account.username);
		self.login(&user.credentials()).await
	}

	pub async fn current_user(&self) -> Result<Account, ApiError> {
		let token = self.get_token().ok_or(ApiError::SessionMissing)?;
		FetchCurrentUser::get(&self.client, &token).await
	}

	/// Recovers a session without user interaction, per the configured strategy.
	/// On failure the session stays absent; the caller decides where to send the user.
	pub async fn auto_login(&self) -> Result<String, ApiError> {
		match self.silent_login().await {
			Ok(token) => {
				log::info!(target: "session", "session recovered silently");
				Ok(token)
			}
			Err(err) => {
				log::warn!(target: "session", "silent login failed: {err}");
				Err(err)
			}
		}
	}

	/// The stored token, or a silently recovered one.
	pub async fn ensure_token(&self) -> Result<String, ApiError> {
		if let Some(token) = self.get_token() {
			return Ok(token);
		}
		self.auto_login().await?;
		self.get_token().ok_or(ApiError::SessionMissing)
	}

	pub fn logout(&self) {
		Token::delete(&*self.store);
		Username::delete(&*self.store);
		RefreshToken::delete(&*self.store);
		log::info!(target: "session", "logged out");
	}

	fn apply_issued(&self, issued: IssuedToken) {
		self.set_session(Token(issued.token));
		if let Some(refresh) = issued.refresh_token {
			self.set_session(RefreshToken(refresh));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::StructuredError,
		test_util::{block_on, MockTransport},
	};
	use serde_json::json;

	fn manager(transport: &MockTransport, auth: AuthConfig) -> SessionManager {
		SessionManager::new(MemorySessionStore::default(), transport.client(), auth)
	}

	fn ada() -> Credentials {
		Credentials {
			username: "ada".into(),
			password: "hunter2".into(),
		}
	}

	#[test]
	fn login_persists_token_and_user() {
		let transport = MockTransport::default();
		transport.respond("TokenAuth", json!({ "tokenAuth": { "token": "T1" } }));
		let session = manager(&transport, AuthConfig::default());
		let result = block_on(session.login(&ada())).unwrap();
		assert_eq!(
			result,
			Session {
				token: Some("T1".into()),
				username: Some("ada".into()),
			}
		);
		assert_eq!(session.get_token().as_deref(), Some("T1"));
	}

	#[test]
	fn rejected_login_persists_nothing() {
		let transport = MockTransport::default();
		transport.fail("TokenAuth", ApiError::Protocol(vec![StructuredError::from("Please enter valid credentials")]));
		let session = manager(&transport, AuthConfig::default());
		let err = block_on(session.login(&ada())).unwrap_err();
		assert!(matches!(err, ApiError::Protocol(_)));
		assert_eq!(session.session(), Session::default());
	}

	#[test]
	fn logout_clears_every_key() {
		let transport = MockTransport::default();
		let session = manager(&transport, AuthConfig::default());
		session.set_session(Token("T1".into()));
		session.set_session(Username("ada".into()));
		session.set_session(RefreshToken("R1".into()));
		session.logout();
		assert_eq!(session.session(), Session::default());
		assert!(RefreshToken::load(&*session.store).is_none());
	}

	#[test]
	fn ensure_token_prefers_stored_token() {
		let transport = MockTransport::default();
		let session = manager(&transport, AuthConfig::default());
		session.set_session(Token("T0".into()));
		assert_eq!(block_on(session.ensure_token()).unwrap(), "T0");
		assert!(transport.requests().is_empty());
	}

	#[test]
	fn sign_up_creates_then_logs_in() {
		let transport = MockTransport::default();
		transport.respond(
			"CreateUser",
			json!({ "createUser": { "user": { "id": 1, "username": "ada", "email": "ada@example.com" } } }),
		);
		transport.respond("TokenAuth", json!({ "tokenAuth": { "token": "T1" } }));
		let session = manager(&transport, AuthConfig::default());
		let user = NewUser {
			username: "ada".into(),
			email: "ada@example.com".into(),
			password: "hunter2".into(),
		};
		let result = block_on(session.sign_up(&user)).unwrap();
		assert_eq!(result.token.as_deref(), Some("T1"));
		assert_eq!(transport.operation_names(), vec!["CreateUser", "TokenAuth"]);
	}

	#[test]
	fn current_user_requires_a_token() {
		let transport = MockTransport::default();
		let session = manager(&transport, AuthConfig::default());
		assert!(matches!(block_on(session.current_user()), Err(ApiError::SessionMissing)));
		assert!(transport.requests().is_empty());
	}
}
