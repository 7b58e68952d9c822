use std::{fmt, str::FromStr};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::CONTACT_RECIPIENT;

use super::PortfolioError;

/// Characters that would end or split a `mailto` query value. Spaces pass through.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'&')
    .add(b'#')
    .add(b'?')
    .add(b'=')
    .add(b'+');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Form order, which is also the order missing fields are reported in.
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Value of the form control's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| PortfolioError::UnknownField(s.to_string()))
    }
}

/// In-progress values of the contact form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First empty field in form order. Matches the browser's `required` check,
    /// which accepts whitespace.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn mailto(&self) -> MailtoLink {
        MailtoLink(format!(
            "mailto:{CONTACT_RECIPIENT}?subject=Contact from {}&body={}",
            utf8_percent_encode(&self.name, QUERY_VALUE),
            utf8_percent_encode(&self.message, QUERY_VALUE),
        ))
    }
}

/// A `mailto:` URI handed to the browser. The sender's email is not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink(String);

impl MailtoLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
