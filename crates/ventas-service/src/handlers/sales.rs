//! Sale registration and listing handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use chrono::NaiveDate;
use serde::Deserialize;

use ventas_core::SaleRecord;

use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

/// Registration form fields, named as the form (and the data file) names
/// them.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// Customer identifier.
    pub cliente_id: String,
    /// Sale amount.
    pub total: f64,
    /// Sale date, `YYYY-MM-DD`.
    pub fecha: NaiveDate,
}

/// Render the registration form.
pub async fn registration_form() -> Html<String> {
    render::registration_page()
}

/// Accept a registration submission and redirect to the listing.
pub async fn register_sale(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, ApiError> {
    let record = SaleRecord::new(form.cliente_id, form.total, form.fecha);
    state.store.append(&record)?;

    tracing::info!(
        customer_id = %record.customer_id,
        total = record.total,
        date = %record.date,
        "sale recorded"
    );

    Ok(Redirect::to("/listado"))
}

/// Render all recorded sales.
pub async fn list_sales(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let records = state.store.read_all()?;
    Ok(render::listing_page(&records))
}
