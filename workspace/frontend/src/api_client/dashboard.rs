use crate::api_client;
use common::{DashboardSnapshot, Period};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DashboardRequest {
    period: Period,
}

/// Fetch the dashboard snapshot for one aggregation window. The period token
/// goes to the server unvalidated; the server is authoritative about the
/// supported set.
pub async fn get_dashboard_data(period: Period) -> Result<DashboardSnapshot, String> {
    log::trace!("Fetching dashboard snapshot for period: {}", period);
    let result =
        api_client::post::<DashboardSnapshot, _>("/dashboard/data", &DashboardRequest { period })
            .await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch dashboard snapshot: {}", e);
    }

    result
}
