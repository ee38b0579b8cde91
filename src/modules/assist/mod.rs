pub mod controller;
pub mod router;
pub mod service;

pub use router::init_assist_router;
pub use service::AssistService;
