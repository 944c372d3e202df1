use std::sync::{Arc, Weak};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::builder::InvoiceBuilder;
use super::contact::Contact;
use super::error::{ValidationError, XeroError};
use super::format::format_date;
use super::gateway::{Gateway, Response};
use super::line_item::{LineItem, LineItemSpec};
use super::payment::Payment;
use super::types::*;
use super::validation;

/// Line items of an invoice, tagged by whether they are the complete,
/// authoritative set.
///
/// List endpoints of the service omit line items, so an invoice parsed from
/// a summary holds `NotDownloaded` until its items are fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineItems {
    /// Complete; reads never go back to the service.
    Downloaded(Vec<LineItem>),
    /// Whatever was added locally; may be incomplete.
    NotDownloaded(Vec<LineItem>),
}

impl Default for LineItems {
    fn default() -> Self {
        Self::NotDownloaded(Vec::new())
    }
}

impl LineItems {
    pub fn as_slice(&self) -> &[LineItem] {
        match self {
            Self::Downloaded(items) | Self::NotDownloaded(items) => items,
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, Self::Downloaded(_))
    }

    pub fn into_vec(self) -> Vec<LineItem> {
        match self {
            Self::Downloaded(items) | Self::NotDownloaded(items) => items,
        }
    }

    pub(crate) fn push(&mut self, item: LineItem) -> &LineItem {
        let items = match self {
            Self::Downloaded(items) | Self::NotDownloaded(items) => items,
        };
        items.push(item);
        &items[items.len() - 1]
    }

    /// Mark the current items as complete.
    pub(crate) fn mark_downloaded(&mut self) {
        if let Self::NotDownloaded(items) = self {
            *self = Self::Downloaded(std::mem::take(items));
        }
    }
}

/// Totals as the service reported them when the invoice was parsed.
///
/// Never used in place of the computed totals; see
/// [`Invoice::totals_match_reported`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedTotals {
    pub sub_total: Option<Decimal>,
    pub total_tax: Option<Decimal>,
    pub total: Option<Decimal>,
}

/// An invoice as exchanged with the accounting service.
///
/// Monetary totals are always derived from the line items. Reading
/// [`Invoice::line_items`] on an invoice that came from a summary listing
/// fetches the full record once through the attached [`Gateway`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Service-assigned GUID; `None` for invoices never sent.
    pub invoice_id: Option<String>,
    pub invoice_type: InvoiceType,
    /// `None` until the service has persisted the invoice.
    pub invoice_status: Option<InvoiceStatus>,
    pub invoice_number: Option<String>,
    pub reference: Option<String>,
    pub line_amount_types: LineAmountType,
    /// ISO 4217 code, e.g. "NZD".
    pub currency_code: Option<String>,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub fully_paid_on: Option<NaiveDate>,
    pub contact: Option<Contact>,
    pub(crate) line_items: LineItems,
    pub(crate) payments: Vec<Payment>,
    pub(crate) amount_due: Option<Decimal>,
    pub(crate) amount_paid: Option<Decimal>,
    pub(crate) amount_credited: Option<Decimal>,
    pub(crate) reported_totals: ReportedTotals,
    pub(crate) updated_at: Option<NaiveDateTime>,
    pub(crate) url: Option<String>,
    #[serde(skip)]
    pub(crate) gateway: Option<Weak<dyn Gateway>>,
    #[serde(skip)]
    pub(crate) errors: Vec<ValidationError>,
}

impl Default for Invoice {
    fn default() -> Self {
        InvoiceBuilder::new().build()
    }
}

impl Invoice {
    pub fn builder() -> InvoiceBuilder {
        InvoiceBuilder::new()
    }

    // -----------------------------------------------------------------------
    // Gateway
    // -----------------------------------------------------------------------

    /// Attach the gateway used for lazy fetches and persistence.
    /// Only a weak reference is kept.
    pub fn attach_gateway(&mut self, gateway: &Arc<dyn Gateway>) {
        self.gateway = Some(Arc::downgrade(gateway));
    }

    pub fn has_gateway(&self) -> bool {
        self.gateway
            .as_ref()
            .is_some_and(|g| g.strong_count() > 0)
    }

    fn live_gateway(&self) -> Result<Arc<dyn Gateway>, XeroError> {
        self.gateway
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(XeroError::NoGateway)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Run all field checks, replacing the stored error list.
    /// Returns true when no check failed.
    pub fn valid(&mut self) -> bool {
        self.errors = validation::validate_invoice(self);
        self.errors.is_empty()
    }

    /// Errors from the most recent [`Invoice::valid`] call.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    // -----------------------------------------------------------------------
    // Totals
    // -----------------------------------------------------------------------

    /// Sum of line amounts of the line items currently held.
    pub fn sub_total(&self) -> Decimal {
        self.line_items.as_slice().iter().map(LineItem::line_amount).sum()
    }

    /// Sum of tax amounts of the line items currently held.
    pub fn total_tax(&self) -> Decimal {
        self.line_items.as_slice().iter().map(|li| li.tax_amount).sum()
    }

    pub fn total(&self) -> Decimal {
        self.sub_total() + self.total_tax()
    }

    /// Accepted for wire compatibility; the sub-total is always computed.
    #[deprecated(note = "sub_total is computed from line items")]
    pub fn set_sub_total(&mut self, _value: Decimal) {}

    /// Accepted for wire compatibility; the tax total is always computed.
    #[deprecated(note = "total_tax is computed from line items")]
    pub fn set_total_tax(&mut self, _value: Decimal) {}

    /// Accepted for wire compatibility; the total is always computed.
    #[deprecated(note = "total is computed from line items")]
    pub fn set_total(&mut self, _value: Decimal) {}

    pub fn reported_totals(&self) -> &ReportedTotals {
        &self.reported_totals
    }

    /// Whether every total the service reported equals the recomputed one.
    /// Totals the service did not report are ignored.
    pub fn totals_match_reported(&self) -> bool {
        let r = &self.reported_totals;
        r.sub_total.is_none_or(|v| v == self.sub_total())
            && r.total_tax.is_none_or(|v| v == self.total_tax())
            && r.total.is_none_or(|v| v == self.total())
    }

    pub fn amount_due(&self) -> Option<Decimal> {
        self.amount_due
    }

    pub fn amount_paid(&self) -> Option<Decimal> {
        self.amount_paid
    }

    pub fn amount_credited(&self) -> Option<Decimal> {
        self.amount_credited
    }

    // -----------------------------------------------------------------------
    // Line items
    // -----------------------------------------------------------------------

    pub fn line_items_downloaded(&self) -> bool {
        self.line_items.is_downloaded()
    }

    /// Line items held locally, without going to the service.
    pub fn cached_line_items(&self) -> &[LineItem] {
        self.line_items.as_slice()
    }

    /// The invoice's line items, fetched from the service first if this
    /// invoice was parsed from a summary and carries a service GUID.
    ///
    /// The fetch happens at most once; afterwards the items are cached.
    pub fn line_items(&mut self) -> Result<&[LineItem], XeroError> {
        if self.awaiting_remote_line_items() {
            self.download_line_items()?;
        }
        Ok(self.line_items.as_slice())
    }

    /// True for an invoice parsed from a summary whose line items are still
    /// on the service: not downloaded, with a service GUID.
    pub fn awaiting_remote_line_items(&self) -> bool {
        !self.line_items.is_downloaded() && self.invoice_id.as_deref().is_some_and(is_guid)
    }

    fn download_line_items(&mut self) -> Result<(), XeroError> {
        let gateway = self.live_gateway()?;
        let invoice_id = self.invoice_id.clone().unwrap_or_default();
        tracing::debug!(invoice_id = %invoice_id, "fetching invoice line items");

        let response = gateway.get_invoice(&invoice_id)?;
        if !response.success {
            tracing::warn!(invoice_id = %invoice_id, errors = ?response.errors, "invoice fetch failed");
            return Err(XeroError::NotFound(invoice_id));
        }
        let Some(full) = response.into_invoice() else {
            tracing::warn!(invoice_id = %invoice_id, "invoice fetch returned no invoice");
            return Err(XeroError::NotFound(invoice_id));
        };

        let items = full.line_items.into_vec();
        tracing::debug!(invoice_id = %invoice_id, line_items = items.len(), "invoice line items fetched");
        self.line_items = LineItems::Downloaded(items);
        Ok(())
    }

    /// Append a line item and return it.
    pub fn add_line_item(
        &mut self,
        spec: impl Into<LineItemSpec>,
    ) -> Result<&LineItem, XeroError> {
        let item = LineItem::try_from(spec.into())?;
        Ok(self.line_items.push(item))
    }

    // -----------------------------------------------------------------------
    // Relationships
    // -----------------------------------------------------------------------

    /// The invoice's contact, created empty on first access.
    pub fn contact_mut(&mut self) -> &mut Contact {
        self.contact.get_or_insert_with(Contact::default)
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    // -----------------------------------------------------------------------
    // Read-only service metadata
    // -----------------------------------------------------------------------

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    /// Source-document URL attached on the service.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_accounts_receivable(&self) -> bool {
        self.invoice_type == InvoiceType::AccRec
    }

    pub fn is_accounts_payable(&self) -> bool {
        self.invoice_type == InvoiceType::AccPay
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Create this invoice on the service through the attached gateway.
    /// Line items still on the service are fetched first.
    pub fn create(&mut self) -> Result<Response, XeroError> {
        let gateway = self.live_gateway()?;
        self.line_items()?;
        tracing::debug!(
            invoice_number = self.invoice_number.as_deref().unwrap_or(""),
            line_items = self.line_items.as_slice().len(),
            "creating invoice"
        );
        gateway.create_invoice(self)
    }

    /// Same as [`Invoice::create`]; the service only supports creation.
    pub fn save(&mut self) -> Result<Response, XeroError> {
        self.create()
    }
}

/// Wire-oriented equality: descriptive fields, computed totals, contact and
/// line items by value; dates by their rendered text. A missing contact
/// equals an empty one. Identity, payments and service-side amounts are not
/// compared.
impl PartialEq for Invoice {
    fn eq(&self, other: &Self) -> bool {
        let rendered = |d: Option<NaiveDate>| d.map(format_date);

        self.invoice_number == other.invoice_number
            && self.invoice_type == other.invoice_type
            && self.invoice_status == other.invoice_status
            && self.reference == other.reference
            && self.line_amount_types == other.line_amount_types
            && self.sub_total() == other.sub_total()
            && self.total_tax() == other.total_tax()
            && self.total() == other.total()
            && same_contact(self.contact.as_ref(), other.contact.as_ref())
            && self.line_items.as_slice() == other.line_items.as_slice()
            && rendered(self.date) == rendered(other.date)
            && rendered(self.due_date) == rendered(other.due_date)
    }
}

fn same_contact(a: Option<&Contact>, b: Option<&Contact>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        (Some(c), None) | (None, Some(c)) => *c == Contact::default(),
        (None, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(amount: Decimal, tax: Decimal) -> LineItem {
        LineItem::new("Item", Decimal::ONE, amount).tax_amount(tax)
    }

    #[test]
    fn totals_use_exact_decimals() {
        let invoice = Invoice::builder()
            .add_line_item(item(dec!(0.10), dec!(0.01)))
            .add_line_item(item(dec!(0.10), dec!(0.01)))
            .add_line_item(item(dec!(0.10), dec!(0.01)))
            .build();
        assert_eq!(invoice.sub_total(), dec!(0.30));
        assert_eq!(invoice.total_tax(), dec!(0.03));
        assert_eq!(invoice.total(), dec!(0.33));
    }

    #[test]
    fn empty_invoice_totals_zero() {
        let invoice = Invoice::default();
        assert_eq!(invoice.sub_total(), Decimal::ZERO);
        assert_eq!(invoice.total(), Decimal::ZERO);
    }

    #[test]
    #[allow(deprecated)]
    fn legacy_setters_are_inert() {
        let mut invoice = Invoice::builder()
            .add_line_item(item(dec!(10), dec!(1.5)))
            .build();
        invoice.set_sub_total(dec!(999));
        invoice.set_total_tax(dec!(999));
        invoice.set_total(dec!(999));
        assert_eq!(invoice.sub_total(), dec!(10));
        assert_eq!(invoice.total_tax(), dec!(1.5));
        assert_eq!(invoice.total(), dec!(11.5));
    }

    #[test]
    fn contact_created_on_first_access() {
        let mut invoice = Invoice::default();
        assert!(invoice.contact.is_none());
        invoice.contact_mut().name = "Acme".into();
        assert_eq!(invoice.contact.as_ref().unwrap().name, "Acme");
    }

    #[test]
    fn equality_ignores_identity_and_download_state() {
        let a = Invoice::builder()
            .invoice_number("INV-1")
            .add_line_item(item(dec!(5), dec!(0)))
            .build();
        let mut b = a.clone();
        b.invoice_id = Some("0e64a623-c2a1-446a-93ed-eb897f118cbc".into());
        b.line_items.mark_downloaded();
        assert_eq!(a, b);

        b.reference = Some("PO-7".into());
        assert_ne!(a, b);
    }

    #[test]
    fn missing_contact_equals_empty_contact() {
        let a = Invoice::builder().invoice_number("INV-1").build();
        let mut b = a.clone();
        b.contact = Some(Contact::default());
        assert_eq!(a, b);

        b.contact_mut().name = "Acme".into();
        assert_ne!(a, b);
    }

    #[test]
    fn mark_downloaded_keeps_items() {
        let mut items = LineItems::NotDownloaded(vec![item(dec!(1), dec!(0))]);
        items.mark_downloaded();
        assert!(items.is_downloaded());
        assert_eq!(items.as_slice().len(), 1);
    }
}
