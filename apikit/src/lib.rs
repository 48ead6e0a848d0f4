pub mod client;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod resources;
pub mod session;
pub mod types;

pub use client::PharmClient;
pub use config::GatewayConfig;
pub use errors::ApiError;
pub use gateway::http::HttpGateway;
pub use gateway::token::{MemoryTokenStore, TokenStore};
pub use session::{AuthSession, SessionState};
