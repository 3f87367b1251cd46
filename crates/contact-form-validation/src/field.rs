//! Field identities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One labeled input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Username,
    Password,
    Message,
}

impl FieldName {
    /// All fields, in form order
    pub const ALL: [FieldName; 3] = [FieldName::Username, FieldName::Password, FieldName::Message];

    /// Field name as used for the input element id
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Password => "password",
            FieldName::Message => "message",
        }
    }

    /// Element id of the slot that displays this field's error
    pub fn error_slot_id(self) -> &'static str {
        match self {
            FieldName::Username => "usernameError",
            FieldName::Password => "passwordError",
            FieldName::Message => "messageError",
        }
    }

    /// Position in [`FieldName::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(FieldName::Username),
            "password" => Ok(FieldName::Password),
            "message" => Ok(FieldName::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
