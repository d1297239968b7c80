//! KPI Card Component
//!
//! One summary metric card: icon, label, formatted value, and a delta badge
//! colored by direction.

use leptos::*;

use crate::api::Kpi;
use crate::format::{format_delta, format_value};

/// Metric card for one dashboard KPI
#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    let value = format_value(kpi.value, kpi.format);
    let delta = format_delta(kpi.delta);
    let delta_class = if kpi.delta >= 0.0 {
        "delta-badge delta-up"
    } else {
        "delta-badge delta-down"
    };

    view! {
        <div class="card kpi-card">
            <div class="kpi-head">
                <div class="kpi-label">
                    <span class="kpi-icon">{kpi_icon(&kpi.icon)}</span>
                    <span>{kpi.label}</span>
                </div>
                <span class=delta_class>{delta}</span>
            </div>
            <div class="kpi-value">{value}</div>
        </div>
    }
}

/// Icon glyph for a KPI icon name
fn kpi_icon(icon: &str) -> &'static str {
    match icon {
        "Activity" => "⚡",
        "Users" => "👥",
        "TrendingUp" => "📈",
        "CreditCard" => "💳",
        _ => "📊",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_falls_back() {
        assert_eq!(kpi_icon("Users"), "👥");
        assert_eq!(kpi_icon("NoSuchIcon"), "📊");
        assert_eq!(kpi_icon(""), "📊");
    }
}
