//! Contact form fields and the draft they are captured into.
//!
//! There is no submission pipeline: a draft is collected so a handler could be
//! attached later, but nothing sends it anywhere.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
        }
    }

    /// HTML input type; `None` means the field renders as a textarea.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ContactField::Name => Some("text"),
            ContactField::Email => Some("email"),
            ContactField::Phone => Some("tel"),
            ContactField::Message => None,
        }
    }

    /// Form control name attribute.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Fields holding something other than whitespace.
    pub fn filled(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| !self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.filled().is_empty()
    }
}
