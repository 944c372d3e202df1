use thiserror::Error;

/// Errors raised by invoice operations that reach beyond the local record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XeroError {
    /// A remote operation was attempted on an invoice with no live gateway.
    #[error("no gateway attached to this invoice")]
    NoGateway,

    /// The gateway answered but did not return the requested invoice.
    #[error("invoice not found: {0}")]
    NotFound(String),

    /// Value passed to line-item addition could not become a line item.
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// Malformed XML or unparseable money/date/code text.
    #[error("XML error: {0}")]
    Xml(String),

    /// Transport failure reported by a gateway implementation.
    #[error("gateway error: {0}")]
    Gateway(String),
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field (e.g. "invoice_number").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
