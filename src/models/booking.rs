use serde::{Deserialize, Serialize};

/// The contact form draft. Serializes to exactly the four string keys the
/// intake endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub package: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Package,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Package, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Package => "package",
            Field::Message => "message",
        }
    }
}

impl BookingRequest {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            package: package.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Package => &self.package,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Package => self.package = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Digits only, e.g. "(555) 123-4567" -> "5551234567".
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}
