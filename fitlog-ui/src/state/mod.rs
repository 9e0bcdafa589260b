//! State Management
//!
//! Session persistence and the dashboard's reactive state.

pub mod dashboard;
pub mod session;

pub use dashboard::{DashboardState, UiDashboard};
pub use session::{browser_sessions, BrowserSessions, LocalStorage};
