pub mod controller;
pub mod router;
pub mod service;

pub use router::init_requests_router;
pub use service::RequestService;
