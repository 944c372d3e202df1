use super::error::ValidationError;
use super::invoice::Invoice;
use super::types::{InvoiceStatus, is_guid};

/// Check an invoice's fields. Every check runs; errors accumulate in
/// check order.
///
/// Line items are checked as currently held, without fetching.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(id) = &invoice.invoice_id {
        if !is_guid(id) {
            errors.push(ValidationError::new(
                "invoice_id",
                "must be blank or a valid Xero GUID",
            ));
        }
    }

    if let Some(status) = &invoice.invoice_status {
        if !status.is_recognized() {
            errors.push(ValidationError::new(
                "invoice_status",
                format!("must be one of {}", InvoiceStatus::recognized_codes()),
            ));
        }
    }

    if invoice
        .invoice_number
        .as_deref()
        .is_none_or(|n| n.trim().is_empty())
    {
        errors.push(ValidationError::new("invoice_number", "can't be blank"));
    }

    if invoice.date.is_none() {
        errors.push(ValidationError::new("invoice_date", "can't be blank"));
    }

    if !invoice.contact.as_ref().is_some_and(|c| c.is_valid()) {
        errors.push(ValidationError::new("contact", "is invalid"));
    }

    if invoice.cached_line_items().iter().any(|li| !li.is_valid()) {
        errors.push(ValidationError::new(
            "line_items",
            "at least one line item invalid",
        ));
    }

    errors
}
