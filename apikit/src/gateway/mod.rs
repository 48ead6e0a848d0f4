pub mod cache;
pub mod http;
pub mod token;
pub mod upload;

pub use cache::QueryCache;
pub use http::HttpGateway;
pub use token::{MemoryTokenStore, TokenStore};
