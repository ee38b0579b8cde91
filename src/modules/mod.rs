pub mod assist;
pub mod dashboard;
pub mod locations;
pub mod requests;
