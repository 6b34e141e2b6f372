use crate::api_client;
use common::ReportRow;

/// Session analytics grouped by customer over the current month, which is
/// the default filter/group context the reports view opens with.
pub async fn get_session_report() -> Result<Vec<ReportRow>, String> {
    log::trace!("Fetching session report");
    let result =
        api_client::get::<Vec<ReportRow>>("/reports/sessions?range=this_month&group_by=customer")
            .await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch session report: {}", e);
    } else {
        log::info!("Successfully fetched session report");
    }

    result
}
