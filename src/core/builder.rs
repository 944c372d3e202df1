use std::sync::{Arc, Weak};

use chrono::NaiveDate;

use super::contact::Contact;
use super::gateway::Gateway;
use super::invoice::{Invoice, LineItems, ReportedTotals};
use super::line_item::LineItem;
use super::payment::Payment;
use super::types::*;

/// Builder for constructing invoices.
///
/// Nothing is checked here; call [`Invoice::valid`] on the result.
///
/// ```
/// use xero_invoice::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new()
///     .invoice_type(InvoiceType::AccRec)
///     .invoice_number("INV-0001")
///     .date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .contact(Contact::new("Acme Ltd"))
///     .add_line_item(LineItem::new("Consulting", dec!(10), dec!(150)).tax_amount(dec!(225)))
///     .build();
///
/// assert_eq!(invoice.total(), dec!(1725));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvoiceBuilder {
    invoice_id: Option<String>,
    invoice_type: InvoiceType,
    invoice_status: Option<InvoiceStatus>,
    invoice_number: Option<String>,
    reference: Option<String>,
    line_amount_types: LineAmountType,
    currency_code: Option<String>,
    date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    fully_paid_on: Option<NaiveDate>,
    contact: Option<Contact>,
    line_items: Vec<LineItem>,
    line_items_downloaded: bool,
    payments: Vec<Payment>,
    gateway: Option<Weak<dyn Gateway>>,
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invoice_id(mut self, id: impl Into<String>) -> Self {
        self.invoice_id = Some(id.into());
        self
    }

    pub fn invoice_type(mut self, invoice_type: InvoiceType) -> Self {
        self.invoice_type = invoice_type;
        self
    }

    pub fn invoice_status(mut self, status: InvoiceStatus) -> Self {
        self.invoice_status = Some(status);
        self
    }

    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = Some(number.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn line_amount_types(mut self, types: LineAmountType) -> Self {
        self.line_amount_types = types;
        self
    }

    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn fully_paid_on(mut self, date: NaiveDate) -> Self {
        self.fully_paid_on = Some(date);
        self
    }

    pub fn contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn add_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    /// Declare the supplied line items complete, so reading them never
    /// goes back to the service.
    pub fn line_items_downloaded(mut self, downloaded: bool) -> Self {
        self.line_items_downloaded = downloaded;
        self
    }

    pub fn add_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Gateway for lazy fetches and persistence. Only a weak reference is kept.
    pub fn gateway(mut self, gateway: &Arc<dyn Gateway>) -> Self {
        self.gateway = Some(Arc::downgrade(gateway));
        self
    }

    pub fn build(self) -> Invoice {
        let line_items = if self.line_items_downloaded {
            LineItems::Downloaded(self.line_items)
        } else {
            LineItems::NotDownloaded(self.line_items)
        };

        Invoice {
            invoice_id: self.invoice_id,
            invoice_type: self.invoice_type,
            invoice_status: self.invoice_status,
            invoice_number: self.invoice_number,
            reference: self.reference,
            line_amount_types: self.line_amount_types,
            currency_code: self.currency_code,
            date: self.date,
            due_date: self.due_date,
            fully_paid_on: self.fully_paid_on,
            contact: self.contact,
            line_items,
            payments: self.payments,
            amount_due: None,
            amount_paid: None,
            amount_credited: None,
            reported_totals: ReportedTotals::default(),
            updated_at: None,
            url: None,
            gateway: self.gateway,
            errors: Vec::new(),
        }
    }
}
