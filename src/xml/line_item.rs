use super::Element;
use crate::core::{LineItem, XeroError, format_money, parse_money};

impl LineItem {
    pub fn to_xml(&self) -> Element {
        let mut el = Element::new("LineItem");
        el.push_opt("LineItemID", self.line_item_id.as_deref())
            .push_text("Description", self.description.as_str())
            .push_text("Quantity", format_money(self.quantity))
            .push_text("UnitAmount", format_money(self.unit_amount))
            .push_opt("ItemCode", self.item_code.as_deref())
            .push_opt("TaxType", self.tax_type.as_deref())
            .push_text("TaxAmount", format_money(self.tax_amount))
            .push_text("LineAmount", format_money(self.line_amount()))
            .push_opt("AccountCode", self.account_code.as_deref());
        el
    }

    /// `LineAmount` is accepted but not stored; it is always
    /// quantity × unit amount.
    pub fn from_xml(element: &Element) -> Result<LineItem, XeroError> {
        let mut item = LineItem::default();
        for child in &element.children {
            let text = child.text();
            match child.name.as_str() {
                "LineItemID" => item.line_item_id = Some(text.to_string()),
                "Description" => item.description = text.to_string(),
                "Quantity" => item.quantity = parse_money(text)?,
                "UnitAmount" => item.unit_amount = parse_money(text)?,
                "ItemCode" => item.item_code = Some(text.to_string()),
                "TaxType" => item.tax_type = Some(text.to_string()),
                "TaxAmount" => item.tax_amount = parse_money(text)?,
                "AccountCode" => item.account_code = Some(text.to_string()),
                _ => {}
            }
        }
        Ok(item)
    }
}
