// services/web-dash/src/pages/dashboard.rs
//
// Landing view: stock aggregates, expiry timeline, category split,
// sales trend, recent alerts, activity log
//

use leptos::*;

use apikit::types::{Alert, CategoryStock, DashboardStats, ExpiryBucket, SalesPoint};

use crate::auth::use_client;
use crate::components::{
    format_currency, format_number, ActivityLog, BarChart, LineChart, PlaceholderBanner, StatCard,
};
use crate::mock;
use crate::pages::load_best_effort;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_client();

    let stats = create_rw_signal(None::<DashboardStats>);
    let expiry = create_rw_signal(None::<Vec<ExpiryBucket>>);
    let categories = create_rw_signal(None::<Vec<CategoryStock>>);
    let sales = create_rw_signal(None::<Vec<SalesPoint>>);
    let recent_alerts = create_rw_signal(None::<Vec<Alert>>);
    let placeholder = create_rw_signal(false);

    // Read-only aggregates: this page is explicitly best-effort, so
    // every failed read degrades to flagged placeholder data.
    let refresh = {
        let client = client.clone();
        move || {
            let c = client.clone();
            load_best_effort(stats, placeholder, mock::dashboard_stats, async move {
                c.dashboard_stats().await
            });
            let c = client.clone();
            load_best_effort(expiry, placeholder, mock::expiry_timeline, async move {
                c.expiry_timeline().await
            });
            let c = client.clone();
            load_best_effort(categories, placeholder, mock::inventory_by_category, async move {
                c.inventory_by_category().await
            });
            let c = client.clone();
            load_best_effort(sales, placeholder, mock::sales_trends, async move {
                c.sales_trends(30).await
            });
            let c = client.clone();
            load_best_effort(recent_alerts, placeholder, mock::alerts, async move {
                c.unacknowledged_alerts().await
            });
        }
    };
    refresh();

    let stat = move || stats.get().unwrap_or_default();

    let expiry_bars = Signal::derive(move || {
        expiry
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|bucket| (bucket.bucket, bucket.value))
            .collect::<Vec<_>>()
    });

    let sales_line = Signal::derive(move || {
        sales
            .get()
            .unwrap_or_default()
            .iter()
            .map(|point| point.quantity as f64)
            .collect::<Vec<_>>()
    });

    let category_rows = move || categories.get().unwrap_or_default();
    let alert_rows = move || {
        recent_alerts
            .get()
            .unwrap_or_default()
            .into_iter()
            .take(5)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page dashboard-page">
            <PlaceholderBanner active=placeholder.into() />

            <div class="stats-grid">
                <StatCard
                    label="Stock Value"
                    value=move || format_currency(stat().total_stock_value)
                    icon="₹"
                    class_name="stat-info"
                />
                <StatCard
                    label="SKUs"
                    value=move || format_number(stat().total_skus)
                    icon="▤"
                    class_name="stat-neutral"
                />
                <StatCard
                    label="Low Stock"
                    value=move || format_number(stat().low_stock_count)
                    icon="▼"
                    class_name="stat-warning"
                />
                <StatCard
                    label="Expiring Soon"
                    value=move || format_number(stat().expiring_soon_count)
                    icon="⏱"
                    class_name="stat-warning"
                />
                <StatCard
                    label="Open Alerts"
                    value=move || format_number(stat().total_alerts)
                    icon="!"
                    class_name="stat-error"
                />
                <StatCard
                    label="Wastage"
                    value=move || format_currency(stat().wastage_value)
                    icon="⊘"
                    class_name="stat-error"
                />
            </div>

            <div class="dashboard-grid">
                <section class="panel">
                    <h2 class="panel-title">"Expiry Timeline"</h2>
                    <BarChart bars=expiry_bars />
                </section>

                <section class="panel">
                    <h2 class="panel-title">"Consumption (30 days)"</h2>
                    <LineChart points=sales_line stroke="#22c55e" />
                </section>

                <section class="panel">
                    <h2 class="panel-title">"Inventory by Category"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Category"</th>
                                <th>"Units"</th>
                                <th>"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=category_rows
                                key=|row| row.category.clone()
                                children=|row| {
                                    view! {
                                        <tr>
                                            <td>{row.category}</td>
                                            <td>{format_number(row.total_quantity)}</td>
                                            <td>{format_currency(row.total_value)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>
            </div>

            <div class="dashboard-grid bottom-row">
                <section class="panel">
                    <h2 class="panel-title">"Recent Alerts"</h2>
                    <For
                        each=alert_rows
                        key=|alert| alert.id
                        children=|alert| {
                            view! {
                                <div class=format!("alert-row severity-{}", alert.severity)>
                                    <span class="alert-severity">{alert.severity.clone()}</span>
                                    <span class="alert-message">{alert.message.clone()}</span>
                                </div>
                            }
                        }
                    />
                </section>

                <section class="panel">
                    <h2 class="panel-title">"Activity"</h2>
                    <ActivityLog />
                </section>
            </div>
        </div>
    }
}
