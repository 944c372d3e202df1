//! XML wire format of the accounting service.
//!
//! Documents are read into an [`Element`] tree and entities are marshalled
//! to and from that tree. Element names are case-sensitive and match the
//! service exactly (`InvoiceID`, `LineAmountTypes`, ...). Unknown elements
//! are skipped on input so newer service versions keep parsing.
//!
//! # Example
//!
//! ```
//! use xero_invoice::core::*;
//! use xero_invoice::xml::Element;
//!
//! let xml = "<Invoice><Type>ACCPAY</Type><InvoiceNumber>B-1</InvoiceNumber></Invoice>";
//! let invoice = Invoice::from_xml(&Element::parse(xml).unwrap(), None, None).unwrap();
//! assert!(invoice.is_accounts_payable());
//! assert!(!invoice.line_items_downloaded());
//! ```

mod contact;
mod element;
mod invoice;
mod line_item;
mod payment;
mod response;
mod writer;

pub use element::Element;
