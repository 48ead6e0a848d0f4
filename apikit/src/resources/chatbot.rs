use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{ChatReply, ChatRequest, ChatSuggestions};

pub async fn chat(gateway: &HttpGateway, request: &ChatRequest) -> Result<ChatReply, ApiError> {
    gateway.post_json("/chatbot/chat", request).await
}

pub async fn suggestions(gateway: &HttpGateway) -> Result<ChatSuggestions, ApiError> {
    gateway.get("/chatbot/suggestions").await
}
