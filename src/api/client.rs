//! HTTP API Client
//!
//! Functions for communicating with the Flames Blue backend. The backend is
//! an external collaborator: one dashboard payload, one chat reply endpoint.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::format::KpiFormat;

/// Default backend base URL
pub const DEFAULT_BACKEND: &str = "http://localhost:8000";

/// Resolve the backend base URL from the build environment or the default.
///
/// Normalized by removing a trailing slash.
pub fn backend_base() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or(DEFAULT_BACKEND)
        .trim_end_matches('/')
        .to_string()
}

// ============ Response Types ============

/// Payload of `GET /api/dashboard/sample`.
///
/// Every field defaults to empty so a partial payload degrades to an empty
/// display instead of a parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
    #[serde(default)]
    pub traffic: Vec<TrafficSlice>,
    #[serde(default)]
    pub features: Vec<FeatureUsage>,
    #[serde(default)]
    pub recent: Vec<Signup>,
}

/// One summary metric card
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Kpi {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub delta: f64,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub format: KpiFormat,
}

/// One time bucket of the users/sessions series
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SeriesPoint {
    #[serde(default)]
    pub users: f64,
    #[serde(default)]
    pub sessions: f64,
}

/// One slice of the traffic-source donut
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrafficSlice {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

/// One row of the feature-usage bar chart
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FeatureUsage {
    pub name: String,
    #[serde(default)]
    pub count: f64,
}

/// One row of the recent-signups table
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Signup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub status: String,
}

/// Payload of `POST /api/chat/respond`
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub source: Option<String>,
}

// ============ API Functions ============

/// Fetch the aggregate dashboard payload
pub async fn fetch_dashboard() -> Result<DashboardData, String> {
    let response = Request::get(&format!("{}/api/dashboard/sample", backend_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit one chat message and wait for the reply.
///
/// Any non-success status is an error; the caller does not distinguish
/// timeouts, 4xx, and 5xx.
pub async fn send_chat(message: &str) -> Result<ChatReply, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest<'a> {
        message: &'a str,
    }

    let response = Request::post(&format!("{}/api/chat/respond", backend_base()))
        .json(&ChatRequest { message })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
