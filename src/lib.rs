//! # xero-invoice
//!
//! Mapping layer between an in-memory invoice model and the XML wire format
//! of the Xero accounting service.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Sub-total, tax total and total are always recomputed from line items.
//! Transport and authentication are left to a [`core::Gateway`]
//! implementation supplied by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use xero_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = InvoiceBuilder::new()
//!     .invoice_number("INV-0001")
//!     .date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .contact(Contact::new("Acme Ltd"))
//!     .add_line_item(LineItem::new("Consulting", dec!(10), dec!(150)).tax_amount(dec!(225)))
//!     .build();
//!
//! assert!(invoice.valid());
//! assert_eq!(invoice.sub_total(), dec!(1500));
//! assert_eq!(invoice.total(), dec!(1725));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice model, validation, totals, lazy line items, gateway contract |
//! | `xml` (default) | XML element tree and marshalling of invoices and responses |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
