use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::XeroError;
use super::format::parse_money;
use super::types::is_guid;

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Service-assigned GUID, absent until saved.
    pub line_item_id: Option<String>,
    pub description: String,
    pub quantity: Decimal,
    pub unit_amount: Decimal,
    pub item_code: Option<String>,
    pub account_code: Option<String>,
    pub tax_type: Option<String>,
    pub tax_amount: Decimal,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            line_item_id: None,
            description: String::new(),
            quantity: Decimal::ONE,
            unit_amount: Decimal::ZERO,
            item_code: None,
            account_code: None,
            tax_type: None,
            tax_amount: Decimal::ZERO,
        }
    }
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_amount: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_amount,
            ..Self::default()
        }
    }

    pub fn tax_amount(mut self, amount: Decimal) -> Self {
        self.tax_amount = amount;
        self
    }

    pub fn account_code(mut self, code: impl Into<String>) -> Self {
        self.account_code = Some(code.into());
        self
    }

    pub fn tax_type(mut self, tax_type: impl Into<String>) -> Self {
        self.tax_type = Some(tax_type.into());
        self
    }

    pub fn item_code(mut self, code: impl Into<String>) -> Self {
        self.item_code = Some(code.into());
        self
    }

    /// quantity × unit amount.
    pub fn line_amount(&self) -> Decimal {
        self.quantity * self.unit_amount
    }

    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty()
            && self.line_item_id.as_deref().is_none_or(is_guid)
    }
}

/// Named, typed fields for building a [`LineItem`]. Unset fields take the
/// [`LineItem::default`] values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemFields {
    pub line_item_id: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_amount: Option<Decimal>,
    pub item_code: Option<String>,
    pub account_code: Option<String>,
    pub tax_type: Option<String>,
    pub tax_amount: Option<Decimal>,
}

impl From<LineItemFields> for LineItem {
    fn from(fields: LineItemFields) -> Self {
        let default = LineItem::default();
        LineItem {
            line_item_id: fields.line_item_id,
            description: fields.description.unwrap_or_default(),
            quantity: fields.quantity.unwrap_or(default.quantity),
            unit_amount: fields.unit_amount.unwrap_or(default.unit_amount),
            item_code: fields.item_code,
            account_code: fields.account_code,
            tax_type: fields.tax_type,
            tax_amount: fields.tax_amount.unwrap_or(default.tax_amount),
        }
    }
}

/// Anything accepted by `Invoice::add_line_item`.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemSpec {
    /// A ready-made line item.
    Item(LineItem),
    /// Typed field set.
    Fields(LineItemFields),
    /// Raw `(key, value)` pairs, e.g. from a form or CSV import.
    /// Keys are the snake_case field names of [`LineItem`].
    Map(Vec<(String, String)>),
}

impl From<LineItem> for LineItemSpec {
    fn from(item: LineItem) -> Self {
        Self::Item(item)
    }
}

impl From<LineItemFields> for LineItemSpec {
    fn from(fields: LineItemFields) -> Self {
        Self::Fields(fields)
    }
}

impl From<Vec<(String, String)>> for LineItemSpec {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Map(pairs)
    }
}

impl TryFrom<LineItemSpec> for LineItem {
    type Error = XeroError;

    fn try_from(spec: LineItemSpec) -> Result<Self, XeroError> {
        match spec {
            LineItemSpec::Item(item) => Ok(item),
            LineItemSpec::Fields(fields) => Ok(fields.into()),
            LineItemSpec::Map(pairs) => fields_from_pairs(pairs).map(LineItem::from),
        }
    }
}

fn fields_from_pairs(pairs: Vec<(String, String)>) -> Result<LineItemFields, XeroError> {
    let mut fields = LineItemFields::default();
    for (key, value) in pairs {
        match key.as_str() {
            "line_item_id" => fields.line_item_id = Some(value),
            "description" => fields.description = Some(value),
            "quantity" => fields.quantity = Some(amount(&key, &value)?),
            "unit_amount" => fields.unit_amount = Some(amount(&key, &value)?),
            "item_code" => fields.item_code = Some(value),
            "account_code" => fields.account_code = Some(value),
            "tax_type" => fields.tax_type = Some(value),
            "tax_amount" => fields.tax_amount = Some(amount(&key, &value)?),
            _ => return Err(XeroError::InvalidLineItem(format!("unknown field '{key}'"))),
        }
    }
    Ok(fields)
}

fn amount(key: &str, value: &str) -> Result<Decimal, XeroError> {
    parse_money(value)
        .map_err(|_| XeroError::InvalidLineItem(format!("{key} is not a number: '{value}'")))
}
