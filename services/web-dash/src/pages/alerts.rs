// services/web-dash/src/pages/alerts.rs
//
// Alert list with filters, acknowledge actions, stats, system scan
//

use leptos::*;

use apikit::types::{Alert, AlertFilter, AlertStats};

use crate::auth::use_client;
use crate::components::{format_number, StatCard};
use crate::pages::load;
use crate::state::use_app_state;

#[component]
pub fn AlertsPage() -> impl IntoView {
    let client = use_client();
    let state = use_app_state();

    let severity = create_rw_signal(String::new());
    let show_acknowledged = create_rw_signal(false);

    let alerts = create_rw_signal(None::<Vec<Alert>>);
    let stats = create_rw_signal(None::<AlertStats>);
    let page_error = create_rw_signal(None::<String>);

    let refresh = {
        let client = client.clone();
        move || {
            let filter = AlertFilter {
                severity: {
                    let s = severity.get_untracked();
                    (!s.is_empty()).then_some(s)
                },
                acknowledged: (!show_acknowledged.get_untracked()).then_some(false),
                ..Default::default()
            };
            let c = client.clone();
            load(alerts, page_error, async move { c.alerts(&filter).await });
            let c = client.clone();
            load(stats, page_error, async move { c.alert_stats().await });
        }
    };
    refresh();

    let acknowledge = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |alert_id: i64| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.acknowledge_alert(alert_id).await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        refresh();
                    }
                    Err(err) => {
                        state.log("error", &format!("Acknowledge failed: {}", err));
                        page_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let run_scan = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |_| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.run_system_scan().await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        refresh();
                    }
                    Err(err) => {
                        state.log("error", &format!("System scan failed: {}", err));
                        page_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let stat = move || stats.get().unwrap_or_default();
    let alert_rows = move || alerts.get().unwrap_or_default();

    let severity_changed = {
        let refresh = refresh.clone();
        move |ev: ev::Event| {
            severity.set(event_target_value(&ev));
            refresh();
        }
    };
    let acknowledged_toggled = {
        let refresh = refresh.clone();
        move |ev: ev::Event| {
            show_acknowledged.set(event_target_checked(&ev));
            refresh();
        }
    };

    view! {
        <div class="page alerts-page">
            <div class="page-header">
                <h1 class="page-title">"Alerts"</h1>
                <button class="btn btn-primary" on:click=run_scan>
                    "Run system scan"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard
                    label="Total"
                    value=move || format_number(stat().total_alerts)
                    icon="▤"
                    class_name="stat-neutral"
                />
                <StatCard
                    label="Unacknowledged"
                    value=move || format_number(stat().unacknowledged)
                    icon="!"
                    class_name="stat-error"
                />
                <StatCard
                    label="Critical"
                    value=move || {
                        format_number(stat().by_severity.get("critical").copied().unwrap_or(0))
                    }
                    icon="⚠"
                    class_name="stat-warning"
                />
            </div>

            <div class="filter-bar">
                <select on:change=severity_changed>
                    <option value="">"All severities"</option>
                    <option value="critical">"Critical"</option>
                    <option value="high">"High"</option>
                    <option value="medium">"Medium"</option>
                    <option value="low">"Low"</option>
                </select>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=show_acknowledged
                        on:change=acknowledged_toggled
                    />
                    "Include acknowledged"
                </label>
            </div>

            {move || {
                page_error
                    .get()
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}

            <section class="panel">
                <For
                    each=alert_rows
                    key=|alert| (alert.id, alert.is_acknowledged)
                    children={
                        let acknowledge = acknowledge.clone();
                        move |alert| {
                            let acknowledge = acknowledge.clone();
                            let id = alert.id;
                            view! {
                                <div class=format!("alert-row severity-{}", alert.severity)>
                                    <span class="alert-severity">{alert.severity.clone()}</span>
                                    <span class="alert-type">{alert.alert_type.clone()}</span>
                                    <span class="alert-message">{alert.message.clone()}</span>
                                    <span class="alert-time">
                                        {alert.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                    </span>
                                    <Show
                                        when=move || !alert.is_acknowledged
                                        fallback=|| view! { <span class="alert-acked">"acknowledged"</span> }
                                    >
                                        <button
                                            class="btn btn-small"
                                            on:click={
                                                let acknowledge = acknowledge.clone();
                                                move |_| acknowledge(id)
                                            }
                                        >
                                            "Acknowledge"
                                        </button>
                                    </Show>
                                </div>
                            }
                        }
                    }
                />
            </section>
        </div>
    }
}
