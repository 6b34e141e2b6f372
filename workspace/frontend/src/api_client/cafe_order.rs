use crate::api_client;
use common::{CafeOrderDto, CreateCafeOrderRequest, UpdateCafeOrderRequest};

/// Resolve the open order on a cafe table (`limit=1` server-side; empty vec
/// means the table has no open order).
pub async fn find_open_order(table_id: i64) -> Result<Vec<i64>, String> {
    log::trace!("Searching open cafe order for table {}", table_id);
    api_client::get::<Vec<i64>>(&format!("/cafe/orders/open?table_id={}&limit=1", table_id)).await
}

pub async fn get_order(order_id: i64) -> Result<CafeOrderDto, String> {
    log::trace!("Fetching cafe order ID: {}", order_id);
    let result = api_client::get::<CafeOrderDto>(&format!("/cafe/orders/{}", order_id)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch cafe order {}: {}", order_id, e);
    }

    result
}

pub async fn create_order(request: CreateCafeOrderRequest) -> Result<CafeOrderDto, String> {
    log::trace!("Creating cafe order");
    api_client::post::<CafeOrderDto, _>("/cafe/orders", &request).await
}

pub async fn update_order(
    order_id: i64,
    request: UpdateCafeOrderRequest,
) -> Result<CafeOrderDto, String> {
    log::trace!("Updating cafe order ID: {}", order_id);
    api_client::put::<CafeOrderDto, _>(&format!("/cafe/orders/{}", order_id), &request).await
}
