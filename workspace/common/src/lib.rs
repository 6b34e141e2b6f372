//! Transport-layer types and host-independent view logic for the lounge
//! dashboard. These structs mirror the backend's request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes,
//! and the pure helpers here (period tokens, formatting, chart traces, load
//! sequencing) are what the dashboard component leans on at render time.

pub mod chart;
pub mod format;
mod period;
mod records;
mod refresh;
mod snapshot;

pub use period::Period;
pub use records::{
    CafeOrderDto, CreateCafeOrderRequest, CreateSessionRequest, IndividualType, ReportRow,
    SessionDto, SessionState, SessionType, UpdateCafeOrderRequest, UpdateSessionRequest,
};
pub use refresh::{LoadSequencer, Ticket};
pub use snapshot::{
    Activity, ChartData, ChartDataset, DashboardSnapshot, DashboardStats, Resource,
    ResourceGroupKind, ResourceGroups, ResourceStatus,
};

use serde::{Deserialize, Serialize};

/// Generic API response wrapper used by the backend. The backend owns the
/// canonical definition; we mirror it here so the frontend can unwrap the
/// envelope without a separate schema crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
