use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{BookingRequest, Field};

pub const NAME_REQUIRED: &str = "Name is required";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const PHONE_INVALID: &str = "Valid 10-digit phone required";
pub const PACKAGE_REQUIRED: &str = "Please select a service";
pub const MESSAGE_REQUIRED: &str = "Message is required";

const PHONE_DIGITS: usize = 10;

/// Per-field error messages. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    /// Sets the message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

pub fn validate(draft: &BookingRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    // Format error wins over the empty error.
    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    }
    if draft.phone_digits().len() != PHONE_DIGITS {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    if draft.package.trim().is_empty() {
        errors.insert(Field::Package, PACKAGE_REQUIRED);
    }

    if draft.message.trim().is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    errors
}
