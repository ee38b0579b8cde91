pub mod controller;
pub mod router;
pub mod service;

pub use router::init_dashboard_router;
pub use service::{DashboardService, REPORT_FALLBACK};
