//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoint for calculating payslips.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest};
pub use response::ApiError;
pub use state::AppState;
