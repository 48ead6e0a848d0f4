// services/web-dash/src/pages/forecasting.rs
//
// Reorder suggestions (polled) and per-medicine demand forecasts
//

use leptos::*;

use apikit::types::{Forecast, ReorderSuggestion};

use crate::auth::use_client;
use crate::components::{format_number, PlaceholderBanner};
use crate::mock;
use crate::pages::{load, load_best_effort};
use crate::poll::{start_polling, REORDER_POLL_MS};
use crate::state::use_app_state;

#[component]
pub fn ForecastingPage() -> impl IntoView {
    let client = use_client();
    let state = use_app_state();

    let critical_only = create_rw_signal(false);
    let suggestions = create_rw_signal(None::<Vec<ReorderSuggestion>>);
    let placeholder = create_rw_signal(false);
    let page_error = create_rw_signal(None::<String>);

    // Suggestions age quickly while stock moves, so this view re-polls
    // on a fixed interval for as long as it stays mounted.
    {
        let client = client.clone();
        start_polling(REORDER_POLL_MS, move || {
            let c = client.clone();
            let critical = critical_only.get_untracked();
            load_best_effort(suggestions, placeholder, mock::reorder_suggestions, async move {
                c.reorder_suggestions(None, critical).await
            });
        });
    }

    let refetch_suggestions = {
        let client = client.clone();
        move || {
            let c = client.clone();
            let critical = critical_only.get_untracked();
            load_best_effort(suggestions, placeholder, mock::reorder_suggestions, async move {
                c.reorder_suggestions(None, critical).await
            });
        }
    };

    let run_batch_forecast = {
        let client = client.clone();
        let refetch = refetch_suggestions.clone();
        move |_| {
            let client = client.clone();
            let refetch = refetch.clone();
            spawn_local(async move {
                match client.batch_forecast().await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        refetch();
                    }
                    Err(err) => {
                        state.log("error", &format!("Batch forecast failed: {}", err));
                        page_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    // Single-medicine forecast lookup
    let medicine_id = create_rw_signal(String::new());
    let forecast = create_rw_signal(None::<Forecast>);

    let fetch_forecast = {
        let client = client.clone();
        move |_| {
            let Ok(id) = medicine_id.get_untracked().parse::<i64>() else {
                page_error.set(Some("Enter a numeric medicine id".to_string()));
                return;
            };
            let c = client.clone();
            load(forecast, page_error, async move { c.forecast(id, 30).await });
        }
    };

    let critical_toggled = {
        let refetch = refetch_suggestions.clone();
        move |ev: ev::Event| {
            critical_only.set(event_target_checked(&ev));
            refetch();
        }
    };

    let suggestion_rows = move || suggestions.get().unwrap_or_default();

    view! {
        <div class="page forecasting-page">
            <PlaceholderBanner active=placeholder.into() />

            <div class="page-header">
                <h1 class="page-title">"Forecasting"</h1>
                <button class="btn btn-primary" on:click=run_batch_forecast>
                    "Recompute all forecasts"
                </button>
            </div>

            <div class="filter-bar">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=critical_only
                        on:change=critical_toggled
                    />
                    "Critical and low stock only"
                </label>
            </div>

            {move || {
                page_error
                    .get()
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}

            <section class="panel">
                <h2 class="panel-title">"Reorder Suggestions"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Priority"</th>
                            <th>"Medicine"</th>
                            <th>"In Stock"</th>
                            <th>"30-day Demand"</th>
                            <th>"Reorder At"</th>
                            <th>"Order Qty"</th>
                            <th>"Confidence"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=suggestion_rows
                            key=|row| row.medicine_id
                            children=|row| {
                                view! {
                                    <tr class=format!("priority-{}", row.priority)>
                                        <td class="priority-cell">{row.priority.clone()}</td>
                                        <td>{format!("{} ({})", row.medicine_name, row.sku)}</td>
                                        <td>{format_number(row.current_stock)}</td>
                                        <td>{format!("{:.0}", row.forecasted_demand)}</td>
                                        <td>{format!("{:.0}", row.reorder_point)}</td>
                                        <td>{format!("{:.0}", row.recommended_quantity)}</td>
                                        <td>{format!("{:.0}%", row.confidence_score * 100.0)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Medicine Forecast"</h2>
                <div class="filter-bar">
                    <input
                        type="number"
                        placeholder="Medicine id"
                        prop:value=medicine_id
                        on:input=move |ev| medicine_id.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=fetch_forecast>
                        "Fetch forecast"
                    </button>
                </div>

                {move || {
                    forecast.get().map(|f| {
                        view! {
                            <div class="forecast-card">
                                <h3>{format!("{} ({})", f.medicine_name, f.sku)}</h3>
                                <p>
                                    {format!(
                                        "Expected demand {:.0} units; reorder at {:.0}, order {:.0} \
                                         (confidence {:.0}%)",
                                        f.forecasted_demand,
                                        f.reorder_point,
                                        f.recommended_quantity,
                                        f.confidence_score * 100.0
                                    )}
                                </p>
                                <p class="forecast-reasoning">{f.reasoning.clone()}</p>
                            </div>
                        }
                    })
                }}
            </section>
        </div>
    }
}
