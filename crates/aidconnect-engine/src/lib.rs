//! # AidConnect Engine
//!
//! The status-and-aggregation core. Everything here is synchronous and works
//! on requests already loaded into memory; loading and persisting is the
//! caller's job.
//!
//! - [`status`]: derives a request's [`RequestStatus`](aidconnect_models::RequestStatus)
//!   from its item quantities and applies clamped quantity updates.
//! - [`aggregate`]: rolls a request collection up into
//!   [`DashboardStats`](aidconnect_models::DashboardStats).
//!
//! ```ignore
//! use aidconnect_engine::{aggregate, apply_received};
//!
//! if let Some(update) = apply_received(&mut request, "item-1", 20, now_ms) {
//!     // persist `request`, report `update.status`
//! }
//! let stats = aggregate(&requests, &ignored);
//! ```

pub mod aggregate;
pub mod status;

pub use aggregate::{aggregate, keyword_vocabulary, situation_digest, unfulfilled_percentage};
pub use status::{ReceivedUpdate, apply_received, derive_status, refresh_status, set_received};
