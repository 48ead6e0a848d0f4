use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{NewUser, TokenResponse, UserProfile};

/// OAuth2 form contract: the email travels in the `username` field,
/// form-encoded, not JSON.
pub async fn login(
    gateway: &HttpGateway,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    gateway
        .post_form("/auth/login", &[("username", email), ("password", password)])
        .await
}

pub async fn me(gateway: &HttpGateway) -> Result<UserProfile, ApiError> {
    gateway.get("/auth/me").await
}

pub async fn register(gateway: &HttpGateway, user: &NewUser) -> Result<UserProfile, ApiError> {
    gateway.post_json("/auth/register", user).await
}
