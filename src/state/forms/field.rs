//! Form field keys and the sign-up record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the three sign-up inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    /// All fields in on-screen order
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Email];

    /// Stable key used in error maps and logs
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }

    /// Floating label text
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
        }
    }

    /// Placeholder shown after the cursor while the field is focused and empty.
    /// Mirrors the input type of each entry (free text, telephone, email).
    pub fn hint(self) -> &'static str {
        match self {
            Field::Name => "Jane Doe",
            Field::Phone => "+1 555-123-4567",
            Field::Email => "you@example.com",
        }
    }

    /// Position in the focus order
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Phone => 1,
            Field::Email => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The three values a user is filling in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl FormData {
    #[cfg(test)]
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    /// Get the stored value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    /// Overwrite exactly one field. The value is stored verbatim.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
        };
        *slot = value;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
