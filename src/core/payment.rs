use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment applied to an invoice by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
    pub reference: Option<String>,
    /// Exchange rate for foreign-currency payments.
    pub currency_rate: Option<Decimal>,
}

impl Payment {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self {
            date: Some(date),
            amount,
            ..Self::default()
        }
    }
}
