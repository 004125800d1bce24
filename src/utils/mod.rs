pub mod config;
pub mod device;
pub mod error;
pub mod footer_policy;
pub mod storage;
pub mod viewport;
pub mod visit_gate;
