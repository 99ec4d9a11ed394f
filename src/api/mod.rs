//! HTTP API for the Vacation Engine.
//!
//! This module provides the REST interface over the services: eligibility
//! checks, the submission workflow, HR responses, deletion, reads and the
//! two background-job triggers. Scheduling itself lives outside; the jobs
//! are plain endpoints invoked by an external scheduler.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckRequest, JobRequest, RespondRequest, SubmitRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
