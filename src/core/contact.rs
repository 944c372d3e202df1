use serde::{Deserialize, Serialize};

use super::types::is_guid;

/// The customer or supplier an invoice is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_id: Option<String>,
    pub contact_number: Option<String>,
    /// ACTIVE / DELETED as reported by the service.
    pub contact_status: Option<String>,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub tax_number: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn contact_id(mut self, id: impl Into<String>) -> Self {
        self.contact_id = Some(id.into());
        self
    }

    pub fn email_address(mut self, email: impl Into<String>) -> Self {
        self.email_address = Some(email.into());
        self
    }

    /// A contact needs a name; its id, when set, must be a GUID.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.contact_id.as_deref().is_none_or(is_guid)
    }
}
