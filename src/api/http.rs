use super::{GraphqlRequest, Transport};
use crate::{error::ApiError, response::Envelope};
use futures_util::future::LocalBoxFuture;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

/// POSTs GraphQL requests as JSON to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
	endpoint: Url,
}

impl HttpTransport {
	pub fn new(endpoint: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint,
		}
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	fn build(&self, request: &GraphqlRequest) -> reqwest::RequestBuilder {
		let mut builder = self.client.post(self.endpoint.clone());
		if let Some(token) = &request.token {
			builder = builder.header(AUTHORIZATION, format!("JWT {token}"));
		}
		builder = builder.header(ACCEPT, "application/json");
		builder.json(request)
	}
}

impl Transport for HttpTransport {
	fn execute(&self, request: GraphqlRequest) -> LocalBoxFuture<'_, Result<Envelope, ApiError>> {
		let builder = self.build(&request);
		Box::pin(async move {
			let response = builder.send().await?;
			let status = response.status().as_u16();
			let text = response.text().await?;
			Envelope::parse(status, &text)
		})
	}
}
