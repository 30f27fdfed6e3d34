//! Planner service boundary
//!
//! Both external operations (schedule generation and explanation) go through
//! the [`PlannerApi`] trait so sessions can be exercised against a mock.

pub mod client;
mod error;
mod http;
mod types;

pub use client::PlannerApi;
pub use error::ApiError;
pub use http::HttpPlannerApi;
pub use types::{ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse};
