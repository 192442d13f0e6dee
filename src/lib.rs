pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod ride_log;
pub mod tricks;
