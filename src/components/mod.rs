//! UI Components
//!
//! Reusable Leptos components for the shell, dashboard, and chat.

pub mod chart;
pub mod kpi_card;
pub mod loading;
pub mod message_bubble;
pub mod sidebar;
pub mod signup_table;
pub mod toast;
pub mod topbar;

pub use chart::{BarChart, DonutChart, LineChart, MiniArea};
pub use kpi_card::KpiCard;
pub use loading::CardSkeleton;
pub use message_bubble::MessageBubble;
pub use sidebar::Sidebar;
pub use signup_table::SignupTable;
pub use toast::NoticeToast;
pub use topbar::Topbar;
