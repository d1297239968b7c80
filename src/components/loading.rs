//! Loading Components
//!
//! Skeleton placeholders shown while data is in flight.

use leptos::*;

/// Skeleton standing in for a KPI card while the dashboard loads
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card kpi-card animate-pulse">
            <div class="skeleton-line w-1/3" />
            <div class="skeleton-block w-1/2" />
        </div>
    }
}

/// Single shimmering line, used by the typing placeholder bubble
#[component]
pub fn ShimmerLine() -> impl IntoView {
    view! {
        <div class="skeleton-line shimmer w-28" />
    }
}
