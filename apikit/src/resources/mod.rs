pub mod alerts;
pub mod auth;
pub mod chatbot;
pub mod dashboard;
pub mod forecasting;
pub mod inventory;
pub mod orders;
pub mod suppliers;
pub mod waste;
