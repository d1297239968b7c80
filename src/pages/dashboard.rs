//! Dashboard Page
//!
//! Fetches the aggregate metrics payload once on mount and composes the KPI
//! grid, charts, signup table, and side cards. A fetch or parse failure just
//! ends the loading state and leaves the dashboard empty.

use leptos::*;

use crate::api::{self, DashboardData};
use crate::components::{
    BarChart, CardSkeleton, DonutChart, KpiCard, LineChart, MiniArea, SignupTable,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let data = create_rw_signal(None::<DashboardData>);
    let loading = create_rw_signal(true);

    // Fetch on mount. try_set drops the result if the page unmounted before
    // the response arrived.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(payload) => {
                    data.try_set(Some(payload));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard: {}", e).into(),
                    );
                }
            }
            loading.try_set(false);
        });
    });

    view! {
        <div class="page space-y-6">
            // KPI cards
            <div class="kpi-grid">
                {move || {
                    if loading.get() {
                        (0..4).map(|_| view! { <CardSkeleton /> }).collect_view()
                    } else {
                        data.get()
                            .map(|d| d.kpis)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|kpi| view! { <KpiCard kpi=kpi /> })
                            .collect_view()
                    }
                }}
            </div>

            // Charts
            <div class="chart-grid">
                <Card class="span-2">
                    <CardHeader title="Users / Sessions over time" subtitle="Daily trends" />
                    {move || {
                        let series = data.get().map(|d| d.series).unwrap_or_default();
                        view! { <LineChart data=series /> }
                    }}
                </Card>

                <div class="space-y-4">
                    <Card>
                        <CardHeader title="Traffic Source / Channel Mix" />
                        {move || {
                            let traffic = data.get().map(|d| d.traffic).unwrap_or_default();
                            view! { <DonutChart data=traffic /> }
                        }}
                    </Card>
                    <Card>
                        <CardHeader title="Top Features Used" />
                        {move || {
                            let features = data.get().map(|d| d.features).unwrap_or_default();
                            view! { <BarChart data=features /> }
                        }}
                    </Card>
                </div>
            </div>

            // Secondary row
            <div class="chart-grid">
                <Card class="span-2">
                    <CardHeader title="Recent signups" />
                    {move || {
                        let recent = data.get().map(|d| d.recent).unwrap_or_default();
                        view! { <SignupTable rows=recent /> }
                    }}
                </Card>

                <div class="space-y-4">
                    <Card>
                        <CardHeader title="Metric timeline" />
                        <MiniArea />
                        <ul class="insight-list">
                            <li>"Growth accelerates after latest release."</li>
                            <li>"Weekend dips consistent across months."</li>
                            <li>"Conversion stable within expected band."</li>
                        </ul>
                    </Card>
                    <Card>
                        <CardHeader title="Alerts" />
                        <div class="space-y-2">
                            <AlertChip color="teal" label="Billing success up 3.2%" />
                            <AlertChip color="amber" label="API latency increased" />
                            <AlertChip color="rose" label="Churn risk elevated" />
                        </div>
                    </Card>
                </div>
            </div>

            <div class="page-footnote">
                {format!(
                    "Last updated: {} • ",
                    chrono::Local::now().format("%Y-%m-%d %H:%M")
                )}
                <a href="#">"Help"</a>
            </div>
        </div>
    }
}

/// Bordered content card
#[component]
fn Card(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>{children()}</div>
    }
}

/// Card title with optional subtitle
#[component]
fn CardHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <div class="card-title">{title}</div>
            {subtitle.map(|s| view! { <div class="card-subtitle">{s}</div> })}
        </div>
    }
}

/// Colored alert pill
#[component]
fn AlertChip(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class=format!("alert-chip alert-{}", color)>{label}</div>
    }
}
