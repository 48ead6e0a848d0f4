use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::errors::ApiError;
use crate::gateway::token::TokenStore;

/// The single configured HTTP client shared by every resource module.
///
/// Before each request the bearer token is read from the store and, if
/// present, attached as `Authorization: Bearer <token>`. Failures are
/// logged with status and payload and surfaced as [`ApiError`] — no
/// automatic retry, and no logout-on-401 (the session layer reacts to
/// 401s; forcing navigation from here causes redirect loops).
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
    tokens: Arc<dyn TokenStore>,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path)));
        self.dispatch(path, request).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        self.dispatch(path, request).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        self.dispatch(path, request).await
    }

    /// POST with no body; acknowledge/scan style endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.post(self.url(path)));
        self.dispatch(path, request).await
    }

    /// POST with form-encoded fields (the OAuth2 login contract).
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.post(self.url(path)).form(form));
        self.dispatch(path, request).await
    }

    /// Multipart upload with the extended timeout. Callers validate the
    /// file before building the form; nothing is checked here.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.url(path)).multipart(form);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.config.upload_timeout);
        let request = self.authorize(request);
        self.dispatch(path, request).await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        self.dispatch(path, request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.delete(self.url(path)));
        self.dispatch(path, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            warn!(path, error = %err, "request failed to reach the backend");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(path, status = status.as_u16(), "request ok");
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(path, status = status.as_u16(), body = %body, "request rejected");
            Err(ApiError::Api {
                status: status.as_u16(),
                detail: extract_detail(&body).unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                }),
            })
        }
    }
}

/// FastAPI-style errors carry `{"detail": "..."}`. Shown to the user
/// verbatim when present.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_extracted_from_json_body() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn structured_detail_stringified() {
        let detail = extract_detail(r#"{"detail": ["Missing required columns"]}"#);
        assert_eq!(detail, Some(r#"["Missing required columns"]"#.to_string()));
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), None);
    }
}
