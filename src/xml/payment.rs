use super::Element;
use crate::core::{Payment, XeroError, format_date, format_money, parse_date, parse_money};

impl Payment {
    pub fn to_xml(&self) -> Element {
        let mut el = Element::new("Payment");
        el.push_opt("PaymentID", self.payment_id.as_deref())
            .push_opt("Date", self.date.map(format_date))
            .push_text("Amount", format_money(self.amount))
            .push_opt("Reference", self.reference.as_deref())
            .push_opt("CurrencyRate", self.currency_rate.map(format_money));
        el
    }

    pub fn from_xml(element: &Element) -> Result<Payment, XeroError> {
        let mut payment = Payment::default();
        for child in &element.children {
            let text = child.text();
            match child.name.as_str() {
                "PaymentID" => payment.payment_id = Some(text.to_string()),
                "Date" if !text.is_empty() => payment.date = Some(parse_date(text)?),
                "Amount" => payment.amount = parse_money(text)?,
                "Reference" => payment.reference = Some(text.to_string()),
                "CurrencyRate" if !text.is_empty() => {
                    payment.currency_rate = Some(parse_money(text)?)
                }
                _ => {}
            }
        }
        Ok(payment)
    }
}
