//! Customer profile handler.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Local;

use ventas_core::{CustomerAggregate, SaleRecord};
use ventas_model::classify;

use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

/// Render the aggregate and tier classification for one customer.
///
/// 404 when the customer has no recorded sales.
pub async fn customer_detail(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let records: Vec<SaleRecord> = state
        .store
        .read_all()?
        .into_iter()
        .filter(|r| r.customer_id == customer_id)
        .collect();

    let today = Local::now().date_naive();
    let aggregate = CustomerAggregate::from_records(&records, today).ok_or_else(|| {
        ApiError::NotFound(format!("no sales recorded for customer {customer_id}"))
    })?;

    let tier = classify(state.scorer.as_ref(), &aggregate)?;

    tracing::debug!(
        customer_id = %customer_id,
        purchases = aggregate.purchase_count,
        tier = tier.key(),
        "customer classified"
    );

    let name = format!("Nombre Cliente {customer_id}");
    Ok(render::customer_page(&customer_id, &name, &aggregate, tier))
}
