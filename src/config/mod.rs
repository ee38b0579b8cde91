//! Configuration for the AidConnect API.
//!
//! The types live in the `aidconnect-config` crate; this module re-exports
//! them under the paths the rest of the application uses. Every config is
//! read from environment variables via its `from_env` constructor.
//!
//! - [`ai`]: AI assistant (Gemini) key, model and timeout
//! - [`cors`]: allowed CORS origins
//! - [`dashboard`]: global keyword ignore list and classifier switch
//! - [`rate_limit`]: per-IP rate limits
//! - [`server`]: HTTP and metrics ports

pub use aidconnect_config::{ai, cors, dashboard, rate_limit, server};
