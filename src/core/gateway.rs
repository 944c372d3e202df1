//! The remote-service capability an [`Invoice`] consumes.
//!
//! Transport, authentication and retry policy live in implementations of
//! [`Gateway`]; this crate only calls it. Invoices hold a weak reference to
//! their gateway, so keep the `Arc` alive for as long as invoices need to
//! fetch or create through it.

use chrono::NaiveDateTime;

use super::error::XeroError;
use super::invoice::Invoice;

/// Operations the invoice model needs from the accounting service.
pub trait Gateway {
    /// Fetch one invoice, including its line items.
    fn get_invoice(&self, invoice_id: &str) -> Result<Response, XeroError>;

    /// Create an invoice on the service.
    fn create_invoice(&self, invoice: &Invoice) -> Result<Response, XeroError>;
}

/// What the service answered.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// True when the service reported status `OK`.
    pub success: bool,
    pub status: Option<String>,
    pub provider: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub invoices: Vec<Invoice>,
    /// Error messages the service attached to the response.
    pub errors: Vec<String>,
}

impl Response {
    /// A successful response carrying one invoice.
    pub fn with_invoice(invoice: Invoice) -> Self {
        Self {
            success: true,
            status: Some("OK".to_string()),
            invoices: vec![invoice],
            ..Self::default()
        }
    }

    /// A failed response carrying the given error messages.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            ..Self::default()
        }
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        self.invoices.first()
    }

    pub fn into_invoice(self) -> Option<Invoice> {
        self.invoices.into_iter().next()
    }
}
