use super::{RefreshToken, SessionManager, SessionValue, Username};
use crate::{
	api::auth::{self, TokenAuth},
	config::AutoLogin,
	error::ApiError,
};

impl SessionManager {
	/// Strategies that have nothing to work with fail before touching the network.
	pub(super) async fn silent_login(&self) -> Result<String, ApiError> {
		let issued = match &self.auth.auto_login {
			AutoLogin::Disabled => return Err(ApiError::SessionMissing),
			AutoLogin::RefreshToken => {
				let Some(refresh) = RefreshToken::load(&*self.store) else {
					return Err(ApiError::SessionMissing);
				};
				auth::RefreshToken::send(&self.client, &refresh.0).await?
			}
			AutoLogin::Credentials(credentials) => {
				let issued = TokenAuth::send(&self.client, credentials, self.auth.refresh_tokens).await?;
				self.set_session(Username(credentials.username.clone()));
				issued
			}
		};
		let token = issued.token.clone();
		self.apply_issued(issued);
		Ok(token)
	}
}
