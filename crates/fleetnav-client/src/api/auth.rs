//! Auth API.

use async_trait::async_trait;

use crate::client::FleetClient;
use crate::error::Result;
use crate::session::TokenIssuer;
use crate::types::{Envelope, TokenGrant, TokenRequest};

/// Auth API client.
///
/// The token endpoint authenticates with the `Authorization: APPCODE …`
/// default header plus the signed request body, not with `X-Token`.
pub struct AuthApi {
    client: FleetClient,
}

impl AuthApi {
    pub(crate) fn new(client: FleetClient) -> Self {
        Self { client }
    }

    /// Submit a signed token request.
    pub async fn issue(&self, request: &TokenRequest) -> Result<TokenGrant> {
        let envelope: Envelope<TokenGrant> =
            self.client.post("auth/v1.1/token", None, request).await?;
        envelope.into_data()
    }
}

#[async_trait]
impl TokenIssuer for AuthApi {
    async fn issue(&self, request: &TokenRequest) -> Result<TokenGrant> {
        AuthApi::issue(self, request).await
    }
}
