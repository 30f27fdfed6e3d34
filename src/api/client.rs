//! PlannerApi trait definition

use async_trait::async_trait;

use super::{ApiError, ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse};

/// Stateless client for the two planner services
///
/// Each call is an independent request/response round trip: no conversation or
/// session state lives on this side of the boundary, so the session layer owns
/// all reconciliation of results into view state.
#[async_trait]
pub trait PlannerApi: Send + Sync {
    /// Submit a generation request and wait for the outcome
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ApiError>;

    /// Ask the explanation service to narrate the given context
    async fn explain(&self, request: ExplainRequest) -> Result<ExplainResponse, ApiError>;
}
