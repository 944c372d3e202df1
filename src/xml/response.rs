use std::sync::Arc;

use super::Element;
use crate::core::{Gateway, Invoice, Response, XeroError, parse_date_time};

impl Response {
    /// Parse a service `Response` document.
    ///
    /// Invoices found under `Invoices` (or a lone `Invoice`) get `gateway`
    /// attached. Every `Message` element in the document is collected into
    /// [`Response::errors`].
    pub fn from_xml(xml: &str, gateway: Option<&Arc<dyn Gateway>>) -> Result<Response, XeroError> {
        let root = Element::parse(xml)?;
        let mut response = Response::default();

        for child in &root.children {
            let text = child.text();
            match child.name.as_str() {
                "Status" => {
                    response.success = text == "OK";
                    response.status = Some(text.to_string());
                }
                "ProviderName" => response.provider = Some(text.to_string()),
                "DateTimeUTC" if !text.is_empty() => {
                    response.date_time = Some(parse_date_time(text)?)
                }
                "Invoices" => {
                    for invoice in child.children_named("Invoice") {
                        response
                            .invoices
                            .push(Invoice::from_xml(invoice, gateway, None)?);
                    }
                }
                "Invoice" => response
                    .invoices
                    .push(Invoice::from_xml(child, gateway, None)?),
                _ => {}
            }
        }

        response.errors = root
            .descendants()
            .into_iter()
            .filter(|e| e.name == "Message" && !e.text.is_empty())
            .map(|e| e.text.clone())
            .collect();

        Ok(response)
    }
}
