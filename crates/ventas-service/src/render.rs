//! HTML page rendering.
//!
//! The pages are small enough that they are assembled directly; there is no
//! template engine. Everything user-supplied goes through [`escape`].

use axum::http::StatusCode;
use axum::response::Html;

use ventas_core::{CustomerAggregate, SaleRecord, Tier};

/// Shared page shell.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"es\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Registrar venta</a> | <a href=\"/listado\">Listado</a></nav>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    ))
}

/// The sale registration form.
#[must_use]
pub fn registration_page() -> Html<String> {
    layout(
        "Registrar venta",
        "<h1>Registrar venta</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <label>Cliente ID <input type=\"text\" name=\"cliente_id\" required></label>\n\
         <label>Total <input type=\"number\" name=\"total\" step=\"0.01\" required></label>\n\
         <label>Fecha <input type=\"date\" name=\"fecha\" required></label>\n\
         <button type=\"submit\">Registrar</button>\n\
         </form>",
    )
}

/// The listing of all recorded sales.
#[must_use]
pub fn listing_page(records: &[SaleRecord]) -> Html<String> {
    let mut rows = String::new();
    for record in records {
        let id = escape(&record.customer_id);
        rows.push_str(&format!(
            "<tr><td><a href=\"/cliente/{id}\">{id}</a></td>\
             <td>{:.2}</td><td>{}</td></tr>\n",
            record.total, record.date
        ));
    }

    let body = format!(
        "<h1>Ventas registradas</h1>\n\
         <table>\n\
         <tr><th>Cliente</th><th>Total</th><th>Fecha</th></tr>\n\
         {rows}</table>"
    );
    layout("Listado de ventas", &body)
}

/// The per-customer profile with aggregate and classification.
#[must_use]
pub fn customer_page(
    customer_id: &str,
    name: &str,
    aggregate: &CustomerAggregate,
    tier: Tier,
) -> Html<String> {
    let body = format!(
        "<h1>{name}</h1>\n\
         <p>Cliente: {id}</p>\n\
         <ul>\n\
         <li>Compras: {count}</li>\n\
         <li>Total gastado: {total:.2}</li>\n\
         <li>D&iacute;as desde la &uacute;ltima compra: {days}</li>\n\
         </ul>\n\
         <p class=\"{key}\">Clasificaci&oacute;n: <strong>{label}</strong></p>",
        name = escape(name),
        id = escape(customer_id),
        count = aggregate.purchase_count,
        total = aggregate.total_spent,
        days = aggregate.days_since_last_purchase,
        key = tier.key(),
        label = tier.label(),
    );
    layout("Perfil de cliente", &body)
}

/// A minimal error page.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        "<h1>{status}</h1>\n<p>{message}</p>",
        status = status.as_u16(),
        message = escape(message),
    );
    layout("Error", &body)
}

/// Escape text for embedding in HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
