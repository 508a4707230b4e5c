//! Strong type definitions for receipt points.
//!
//! Identifiers are newtypes so a raw string can never be handed to the
//! store by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::IdError;

/// A receipt identifier, a random (v4) UUID assigned by the store.
///
/// Callers never choose IDs; they only get them back from an insert.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse the exact text [`Display`](fmt::Display) produces: lowercase,
    /// hyphenated, nothing around it.
    ///
    /// Other spellings of the same UUID (uppercase, simple, braced, URN,
    /// padded) are rejected so one receipt answers to exactly one string.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let uuid = Uuid::parse_str(s).map_err(|_| IdError(s.to_string()))?;
        let mut canonical = Uuid::encode_buffer();
        if &*uuid.hyphenated().encode_lower(&mut canonical) != s {
            return Err(IdError(s.to_string()));
        }
        Ok(Self(uuid))
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0.hyphenated())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ReceiptId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
