// services/web-dash/src/state.rs
//
// Shared reactive state for the dashboard shell
//

use leptos::*;

/// Log entry for the activity panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub message: String,
}

/// State shared across the page tree.
/// All fields are RwSignal which is Copy, so AppState is Copy.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Unacknowledged alert count shown in the header badge; kept
    /// fresh by the alert-stats poll.
    pub unread_alerts: RwSignal<i64>,

    /// Whether the last alert poll reached the backend.
    pub backend_reachable: RwSignal<bool>,

    /// Activity log (uploads, acknowledgements, failures).
    pub logs: RwSignal<Vec<LogEntry>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            unread_alerts: create_rw_signal(0),
            backend_reachable: create_rw_signal(true),
            logs: create_rw_signal(vec![]),
        }
    }

    pub fn log(&self, level: &str, message: &str) {
        let entry = LogEntry {
            timestamp: js_sys::Date::new_0()
                .to_iso_string()
                .as_string()
                .unwrap_or_default(),
            level: level.to_string(),
            message: message.to_string(),
        };

        self.logs.update(|logs| {
            logs.push(entry);
            // Keep only last 100 entries
            if logs.len() > 100 {
                logs.remove(0);
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
