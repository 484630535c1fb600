use super::{Client, GraphqlRequest, Operation};
use crate::{data::RecordId, error::ApiError, response::take_field};
use serde::Deserialize;

static TOKEN_AUTH: &str = "mutation TokenAuth($username: String!, $password: String!) {
	tokenAuth(username: $username, password: $password) { token }
}";

static TOKEN_AUTH_WITH_REFRESH: &str = "mutation TokenAuth($username: String!, $password: String!) {
	tokenAuth(username: $username, password: $password) { token refreshToken }
}";

static REFRESH_TOKEN: &str = "mutation RefreshToken($refreshToken: String!) {
	refreshToken(refreshToken: $refreshToken) { token refreshToken }
}";

static CREATE_USER: &str = "mutation CreateUser($username: String!, $email: String!, $password: String!) {
	createUser(username: $username, email: $email, password: $password) { user { id username email } }
}";

static CURRENT_USER: &str = "query GetCurrentUser { currentUser { id username email } }";

#[derive(Clone, PartialEq, Deserialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}
impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

#[derive(Clone, PartialEq)]
pub struct NewUser {
	pub username: String,
	pub email: String,
	pub password: String,
}
impl NewUser {
	pub fn credentials(&self) -> Credentials {
		Credentials {
			username: self.username.clone(),
			password: self.password.clone(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
	pub id: RecordId,
	pub username: String,
	#[serde(default)]
	pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
	pub token: String,
	#[serde(default)]
	pub refresh_token: Option<String>,
}

pub struct TokenAuth;
impl TokenAuth {
	pub async fn send(client: &Client, credentials: &Credentials, with_refresh: bool) -> Result<IssuedToken, ApiError> {
		let query = match with_refresh {
			true => TOKEN_AUTH_WITH_REFRESH,
			false => TOKEN_AUTH,
		};
		let request = GraphqlRequest::new(Operation::Auth, "TokenAuth", query)
			.with_variable("username", credentials.username.as_str())
			.with_variable("password", credentials.password.as_str());
		let mut data = client.send(request).await?;
		take_field(&mut data, "tokenAuth")
	}
}

pub struct RefreshToken;
impl RefreshToken {
	pub async fn send(client: &Client, refresh_token: &str) -> Result<IssuedToken, ApiError> {
		let request = GraphqlRequest::new(Operation::Auth, "RefreshToken", REFRESH_TOKEN)
			.with_variable("refreshToken", refresh_token);
		let mut data = client.send(request).await?;
		take_field(&mut data, "refreshToken")
	}
}

pub struct CreateUser;
impl CreateUser {
	pub async fn send(client: &Client, user: &NewUser) -> Result<Account, ApiError> {
		#[derive(Deserialize)]
		struct Payload {
			user: Account,
		}
		let request = GraphqlRequest::new(Operation::Auth, "CreateUser", CREATE_USER)
			.with_variable("username", user.username.as_str())
			.with_variable("email", user.email.as_str())
			.with_variable("password", user.password.as_str());
		let mut data = client.send(request).await?;
		let payload: Payload = take_field(&mut data, "createUser")?;
		Ok(payload.user)
	}
}

pub struct FetchCurrentUser;
impl FetchCurrentUser {
	pub async fn get(client: &Client, token: &str) -> Result<Account, ApiError> {
		let request = GraphqlRequest::new(Operation::Auth, "GetCurrentUser", CURRENT_USER).with_token(token);
		let mut data = client.send(request).await?;
		take_field(&mut data, "currentUser")
	}
}
