use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{CreateUserRequest, ErrorResponse};
use tracing::debug;
use url::Url;

use crate::error::RequestError;

#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), RequestError>;
}

/// `AccountApi` over HTTP. The response body of a successful call is ignored.
pub struct HttpAccountApi {
    http: Client,
    server_url: String,
}

impl HttpAccountApi {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    fn with_client(http: Client, server_url: impl Into<String>) -> Self {
        Self {
            http,
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn users_url(&self) -> Result<Url, RequestError> {
        Ok(Url::parse(&format!("{}/users", self.server_url))?)
    }
}

#[async_trait]
impl AccountApi for HttpAccountApi {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), RequestError> {
        let url = self.users_url()?;
        debug!(%url, "posting create-user request");
        let response = self.http.post(url).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error);
        Err(RequestError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
