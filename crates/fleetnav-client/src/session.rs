//! Authenticated session: token reuse and renewal.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::credential::{Credential, CredentialCache};
use crate::error::Result;
use crate::sign::sign;
use crate::types::{TokenGrant, TokenRequest};

/// Boundary to whatever performs the token call.
///
/// The session depends on the transport only through this trait; the HTTP
/// implementation lives in [`crate::api::AuthApi`].
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Submit a signed token request and return the grant.
    async fn issue(&self, request: &TokenRequest) -> Result<TokenGrant>;
}

/// Shared token issuer handle.
pub type SharedTokenIssuer = Arc<dyn TokenIssuer>;

/// Authenticated session for one app-id/secret pair.
///
/// Amortizes authentication across calls: `token()` returns the cached token
/// while it is still valid and renews it transparently once it expires. A
/// failed renewal leaves the previously stored credential untouched.
pub struct Session {
    issuer: SharedTokenIssuer,
    app_id: String,
    app_secret: String,
    // Held across renewal so concurrent callers collapse into one token call.
    cache: Mutex<CredentialCache>,
}

impl Session {
    /// Create a session over a token issuer.
    pub fn new(
        issuer: SharedTokenIssuer,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        Self {
            issuer,
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            cache: Mutex::new(CredentialCache::new()),
        }
    }

    /// Get a currently-valid token, renewing if necessary.
    pub async fn token(&self) -> Result<String> {
        let mut cache = self.cache.lock().await;

        let now_ms = chrono::Utc::now().timestamp_millis();
        if cache.is_valid(now_ms) {
            // Reuse without a network call; the sole purpose of the cache.
            if let Some(token) = cache.token() {
                return Ok(token.to_string());
            }
        }

        let request = TokenRequest {
            app_id: self.app_id.clone(),
            timestamp: now_ms,
            sign: sign(&self.app_id, now_ms, &self.app_secret),
        };

        tracing::debug!(app_id = %self.app_id, "renewing fleet token");
        let grant = self.issuer.issue(&request).await.inspect_err(|e| {
            tracing::warn!(error = %e, "token renewal failed; keeping previous credential");
        })?;

        let token = grant.token.clone();
        cache.store(Credential {
            token: grant.token,
            renewal_key: grant.key,
            // Bookkeeping uses the signed timestamp, not response arrival.
            issued_at_ms: now_ms,
            valid_for_secs: grant.expire_time,
        });

        Ok(token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}
