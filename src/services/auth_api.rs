//! Auth API - Logout Endpoint Client
//!
//! `AuthApi` is the seam between the UI and the backend; `HttpAuthApi` is the
//! production implementation.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use gpui::Global;

use crate::domain::config::ApiConfig;
use crate::error::{Error, Result};
use crate::services::runtime::run_in_tokio;

/// Backend authentication calls used by the console
pub trait AuthApi: Send + Sync {
    /// Tell the server the session is over. Any non-success answer is an error.
    fn logout(&self, token: Option<String>) -> BoxFuture<'static, Result<()>>;
}

/// `AuthApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    logout_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("spotline-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            logout_url: config.logout_url(),
        })
    }

    pub fn logout_url(&self) -> &str {
        &self.logout_url
    }
}

impl AuthApi for HttpAuthApi {
    fn logout(&self, token: Option<String>) -> BoxFuture<'static, Result<()>> {
        let client = self.client.clone();
        let url = self.logout_url.clone();

        run_in_tokio(async move {
            let mut request = client.post(&url);
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            // Best effort: surface the server's message in the debug log
            if let Ok(body) = response.json::<serde_json::Value>().await {
                if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
                    tracing::debug!("Logout endpoint replied {}: {}", status, message);
                }
            }

            Err(Error::LogoutRejected {
                status: status.as_u16(),
            })
        })
        .boxed()
    }
}

/// Global handle to the auth backend
#[derive(Clone)]
pub struct AuthService(Arc<dyn AuthApi>);

impl Global for AuthService {}

impl AuthService {
    pub fn new(api: impl AuthApi + 'static) -> Self {
        Self(Arc::new(api))
    }

    pub fn api(&self) -> Arc<dyn AuthApi> {
        self.0.clone()
    }
}
