//! Invoice model, validation, computed totals and the gateway contract.
//!
//! This module has no XML dependency; the wire format lives in
//! [`crate::xml`].

mod builder;
mod contact;
mod error;
pub mod format;
mod gateway;
mod invoice;
mod line_item;
mod payment;
mod types;
mod validation;

pub use builder::*;
pub use contact::*;
pub use error::*;
pub use format::{format_date, format_date_time, format_money, parse_date, parse_date_time, parse_money};
pub use gateway::*;
pub use invoice::*;
pub use line_item::*;
pub use payment::*;
pub use types::*;
pub use validation::*;
