//! The lead-capture form draft.

use std::fmt;

use serde::Serialize;

/// Which assistance the customer is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Lockout,
    Jumpstart,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 2] = [ServiceKind::Lockout, ServiceKind::Jumpstart];

    /// Value of the `<option>` element and of the relay template parameter.
    pub fn value(self) -> &'static str {
        match self {
            ServiceKind::Lockout => "lockout",
            ServiceKind::Jumpstart => "jumpstart",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }

    /// Translation id of the option label.
    pub fn label_key(self) -> &'static str {
        match self {
            ServiceKind::Lockout => "option-lockout",
            ServiceKind::Jumpstart => "option-jumpstart",
        }
    }
}

/// Free-text fields of a [`ServiceRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    CarDetails,
    Location,
    Description,
}

impl Field {
    /// Fields that must be non-empty before a request is sent.
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Phone, Field::CarDetails, Field::Location];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::CarDetails => "carDetails",
            Field::Location => "location",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress service request. Serializes with the field names the relay
/// template uses as placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub name: String,
    pub phone: String,
    pub service: ServiceKind,
    pub car_details: String,
    pub location: String,
    pub description: String,
}

impl ServiceRequest {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::CarDetails => &self.car_details,
            Field::Location => &self.location,
            Field::Description => &self.description,
        }
    }

    /// Overwrite exactly one field.
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::CarDetails => &mut self.car_details,
            Field::Location => &mut self.location,
            Field::Description => &mut self.description,
        };
        *slot = value;
    }

    /// First required field that is empty or whitespace-only.
    pub fn first_missing(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
    }
}
