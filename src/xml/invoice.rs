use std::sync::Arc;

use chrono::Local;

use super::Element;
use crate::core::*;

impl Invoice {
    /// Serialize to an `Invoice` element.
    ///
    /// A missing date is written as today. Nothing is fetched: an invoice
    /// still waiting for its remote line items is written without a
    /// `LineItems` block and with the totals the service reported, so a
    /// reparse is again waiting for them. Otherwise totals are the computed
    /// ones over the line items held.
    pub fn to_xml(&self) -> Element {
        let mut el = Element::new("Invoice");
        el.push_opt("InvoiceID", self.invoice_id.as_deref())
            .push_text("Type", self.invoice_type.code())
            .push_opt("InvoiceStatus", self.invoice_status.as_ref().map(|s| s.code()));

        match &self.contact {
            Some(contact) => el.push(contact.to_xml()),
            None => el.push(Contact::default().to_xml()),
        };

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        el.push_text("Date", format_date(date))
            .push_opt("DueDate", self.due_date.map(format_date))
            .push_opt("InvoiceNumber", self.invoice_number.as_deref())
            .push_opt("Reference", self.reference.as_deref())
            .push_text("LineAmountTypes", self.line_amount_types.code())
            .push_opt("CurrencyCode", self.currency_code.as_deref());

        if self.awaiting_remote_line_items() {
            let reported = self.reported_totals();
            el.push_opt("SubTotal", reported.sub_total.map(format_money))
                .push_opt("TotalTax", reported.total_tax.map(format_money))
                .push_opt("Total", reported.total.map(format_money));
            return el;
        }

        el.push_text("SubTotal", format_money(self.sub_total()))
            .push_text("TotalTax", format_money(self.total_tax()))
            .push_text("Total", format_money(self.total()));

        let mut line_items = Element::new("LineItems");
        for item in self.cached_line_items() {
            line_items.push(item.to_xml());
        }
        el.push(line_items);
        el
    }

    /// Serialize to an `Invoice` element with the complete line items,
    /// fetching them through the gateway first when needed.
    pub fn to_complete_xml(&mut self) -> Result<Element, XeroError> {
        self.line_items()?;
        Ok(self.to_xml())
    }

    /// Serialize to an XML document string.
    pub fn to_xml_string(&self) -> Result<String, XeroError> {
        self.to_xml().to_document()
    }

    /// Deserialize from an `Invoice` element.
    ///
    /// `seed` supplies starting values that the element then overrides;
    /// `gateway` is attached for lazy line-item fetches and persistence.
    /// A `LineItems` child marks the line items as downloaded. Reported
    /// `SubTotal`/`TotalTax`/`Total` are kept in [`Invoice::reported_totals`]
    /// only. Unknown children are skipped. Text is taken verbatim, but a
    /// value consisting only of whitespace reads as empty.
    pub fn from_xml(
        element: &Element,
        gateway: Option<&Arc<dyn Gateway>>,
        seed: Option<InvoiceBuilder>,
    ) -> Result<Invoice, XeroError> {
        let mut invoice = seed.unwrap_or_default().build();
        if let Some(gateway) = gateway {
            invoice.attach_gateway(gateway);
        }

        for child in &element.children {
            let text = child.text();
            match child.name.as_str() {
                "InvoiceStatus" | "Status" => {
                    invoice.invoice_status = Some(InvoiceStatus::from_code(text))
                }
                "InvoiceID" => invoice.invoice_id = Some(text.to_string()),
                "InvoiceNumber" => invoice.invoice_number = Some(text.to_string()),
                "Type" => {
                    invoice.invoice_type = InvoiceType::from_code(text)
                        .ok_or_else(|| XeroError::Xml(format!("unknown invoice type '{text}'")))?
                }
                "Date" => invoice.date = opt_date(text)?,
                "DueDate" => invoice.due_date = opt_date(text)?,
                "Reference" => invoice.reference = Some(text.to_string()),
                "LineAmountTypes" => {
                    invoice.line_amount_types = LineAmountType::from_code(text).ok_or_else(
                        || XeroError::Xml(format!("unknown line amount type '{text}'")),
                    )?
                }
                "CurrencyCode" => invoice.currency_code = Some(text.to_string()),
                "SubTotal" => invoice.reported_totals.sub_total = opt_money(text)?,
                "TotalTax" => invoice.reported_totals.total_tax = opt_money(text)?,
                "Total" => invoice.reported_totals.total = opt_money(text)?,
                "Contact" => invoice.contact = Some(Contact::from_xml(child)?),
                "LineItems" => {
                    for item in &child.children {
                        invoice.line_items.push(LineItem::from_xml(item)?);
                    }
                    invoice.line_items.mark_downloaded();
                }
                "Payments" => {
                    for payment in &child.children {
                        invoice.payments.push(Payment::from_xml(payment)?);
                    }
                }
                "FullyPaidOn" | "FullyPaidOnDate" => invoice.fully_paid_on = opt_date(text)?,
                "AmountDue" => invoice.amount_due = opt_money(text)?,
                "AmountPaid" => invoice.amount_paid = opt_money(text)?,
                "AmountCredited" => invoice.amount_credited = opt_money(text)?,
                "UpdatedDateUTC" if !text.is_empty() => {
                    invoice.updated_at = Some(parse_date_time(text)?)
                }
                "Url" => invoice.url = Some(text.to_string()),
                _ => {}
            }
        }

        Ok(invoice)
    }

    /// Parse an XML document whose root is an `Invoice` element.
    pub fn from_xml_str(
        xml: &str,
        gateway: Option<&Arc<dyn Gateway>>,
    ) -> Result<Invoice, XeroError> {
        Invoice::from_xml(&Element::parse(xml)?, gateway, None)
    }
}

fn opt_date(text: &str) -> Result<Option<chrono::NaiveDate>, XeroError> {
    let text = text.trim();
    if text.is_empty() {
        Ok(None)
    } else {
        parse_date(text).map(Some)
    }
}

fn opt_money(text: &str) -> Result<Option<rust_decimal::Decimal>, XeroError> {
    let text = text.trim();
    if text.is_empty() {
        Ok(None)
    } else {
        parse_money(text).map(Some)
    }
}
