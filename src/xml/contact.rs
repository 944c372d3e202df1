use super::Element;
use crate::core::{Contact, XeroError};

impl Contact {
    pub fn to_xml(&self) -> Element {
        let mut el = Element::new("Contact");
        el.push_opt("ContactID", self.contact_id.as_deref())
            .push_opt("ContactNumber", self.contact_number.as_deref())
            .push_opt("ContactStatus", self.contact_status.as_deref())
            .push_text("Name", self.name.as_str())
            .push_opt("FirstName", self.first_name.as_deref())
            .push_opt("LastName", self.last_name.as_deref())
            .push_opt("EmailAddress", self.email_address.as_deref())
            .push_opt("TaxNumber", self.tax_number.as_deref());
        el
    }

    pub fn from_xml(element: &Element) -> Result<Contact, XeroError> {
        let mut contact = Contact::default();
        for child in &element.children {
            let text = child.text().to_string();
            match child.name.as_str() {
                "ContactID" => contact.contact_id = Some(text),
                "ContactNumber" => contact.contact_number = Some(text),
                "ContactStatus" => contact.contact_status = Some(text),
                "Name" => contact.name = text,
                "FirstName" => contact.first_name = Some(text),
                "LastName" => contact.last_name = Some(text),
                "EmailAddress" => contact.email_address = Some(text),
                "TaxNumber" => contact.tax_number = Some(text),
                _ => {}
            }
        }
        Ok(contact)
    }
}
