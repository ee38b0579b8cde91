//! Validated identity and contact values.
//!
//! Both types trim surrounding whitespace before validating and keep the
//! trimmed text. They are used by the submission DTO validators and by the
//! smart-fill normaliser, which drops values that do not parse.
//!
//! ```ignore
//! use aidconnect_models::value_types::{Nic, PhoneNumber};
//!
//! let nic: Nic = "199012345678".parse().unwrap();
//! let phone: PhoneNumber = "077-123 4567".parse().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    InvalidNic(String),
    InvalidPhoneNumber(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNic(msg) => write!(f, "Invalid NIC: {}", msg),
            Self::InvalidPhoneNumber(msg) => write!(f, "Invalid phone number: {}", msg),
        }
    }
}

// ============================================================================
// Nic
// ============================================================================

/// A national identity card number.
///
/// Two formats are accepted: the old 9 digits followed by `V` or `X`
/// (either case), and the new 12 digit form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "901234567V")]
pub struct Nic(String);

impl Nic {
    pub fn new(nic: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        let nic = nic.as_ref().trim();
        if nic.is_empty() {
            return Err(ValueTypeError::InvalidNic("NIC cannot be empty".into()));
        }
        if !Self::is_well_formed(nic) {
            return Err(ValueTypeError::InvalidNic(format!(
                "'{}' must be 12 digits or 9 digits + V/X",
                nic
            )));
        }
        Ok(Self(nic.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn is_well_formed(nic: &str) -> bool {
        let bytes = nic.as_bytes();
        match bytes.len() {
            12 => bytes.iter().all(u8::is_ascii_digit),
            10 => {
                bytes[..9].iter().all(u8::is_ascii_digit)
                    && matches!(bytes[9], b'v' | b'V' | b'x' | b'X')
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Nic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nic({})", self.0)
    }
}

impl fmt::Display for Nic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nic {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Nic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// PhoneNumber
// ============================================================================

/// A contact phone number.
///
/// Only digits, `+`, `-` and spaces are allowed and the value must be at
/// least 9 characters long. Formatting is kept as entered.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "077-1234567")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_LENGTH: usize = 9;

    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        let phone = phone.as_ref().trim();
        if phone.is_empty() {
            return Err(ValueTypeError::InvalidPhoneNumber(
                "phone number cannot be empty".into(),
            ));
        }

        let valid_chars = phone
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c.is_whitespace());
        if !valid_chars {
            return Err(ValueTypeError::InvalidPhoneNumber(format!(
                "'{}' contains invalid characters",
                phone
            )));
        }

        if phone.chars().count() < Self::MIN_LENGTH {
            return Err(ValueTypeError::InvalidPhoneNumber(format!(
                "phone number must be at least {} characters",
                Self::MIN_LENGTH
            )));
        }

        Ok(Self(phone.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Only the numeric digits, formatting stripped.
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
