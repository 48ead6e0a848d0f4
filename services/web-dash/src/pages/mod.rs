// services/web-dash/src/pages/mod.rs
//
// Page components, one per route
//

mod alerts;
mod chatbot;
mod dashboard;
mod forecasting;
mod inventory;
mod login;
mod orders;
mod register;
mod suppliers;
mod waste;

pub use alerts::AlertsPage;
pub use chatbot::ChatbotPage;
pub use dashboard::DashboardPage;
pub use forecasting::ForecastingPage;
pub use inventory::InventoryPage;
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use register::RegisterPage;
pub use suppliers::SuppliersPage;
pub use waste::WastePage;

use std::future::Future;

use leptos::*;

use apikit::ApiError;

/// Drive a read query into a signal. Failures land in the page's error
/// signal; existing data stays on screen.
pub(crate) fn load<T: 'static>(
    signal: RwSignal<Option<T>>,
    error: RwSignal<Option<String>>,
    fut: impl Future<Output = Result<T, ApiError>> + 'static,
) {
    spawn_local(async move {
        match fut.await {
            Ok(value) => {
                error.set(None);
                signal.set(Some(value));
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    });
}

/// Drive a best-effort read query. On failure the view degrades to the
/// placeholder dataset and raises the placeholder flag so it is never
/// mistaken for live data.
pub(crate) fn load_best_effort<T: 'static>(
    signal: RwSignal<Option<T>>,
    placeholder: RwSignal<bool>,
    fallback: fn() -> T,
    fut: impl Future<Output = Result<T, ApiError>> + 'static,
) {
    spawn_local(async move {
        match fut.await {
            Ok(value) => {
                placeholder.set(false);
                signal.set(Some(value));
            }
            Err(err) => {
                log::warn!("read failed, degrading to placeholder: {}", err);
                placeholder.set(true);
                if signal.with_untracked(|current| current.is_none()) {
                    signal.set(Some(fallback()));
                }
            }
        }
    });
}
