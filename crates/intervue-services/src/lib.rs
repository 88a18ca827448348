//! intervue-services — Interview collaborator backends.
//!
//! Implements the `InterviewService` trait for a remote HTTP service, an
//! offline local heuristic backend, and a mock for tests.

pub mod config;
pub mod local;
pub mod mock;
pub mod remote;

pub use config::{create_service, load_config, IntervueConfig, ServiceConfig};
pub use intervue_core::error::ServiceError;
