//! Identifiers and the user's selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Opaque school identifier, as carried by the selected option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolId(String);

/// Opaque district identifier, as carried by the selected option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(String);

macro_rules! opaque_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(SchoolId);
opaque_id!(DistrictId);

/// One selected option: the identifier it carries and the text it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<Id> {
    pub value: Id,
    pub label: String,
}

impl<Id> Choice<Id> {
    pub fn new(value: impl Into<Id>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The school and district chosen at the moment the migration was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub school: Choice<SchoolId>,
    pub district: Choice<DistrictId>,
}

impl Selection {
    #[must_use]
    pub const fn new(school: Choice<SchoolId>, district: Choice<DistrictId>) -> Self {
        Self { school, district }
    }

    /// Reject selections with an empty school or district value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the empty control.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.school.value.is_empty() {
            return Err(CoreError::Validation("no school selected".into()));
        }
        if self.district.value.is_empty() {
            return Err(CoreError::Validation("no district selected".into()));
        }
        Ok(())
    }

    /// Confirmation text shown after a successful migration.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Migrated {} to {}!",
            self.school.label, self.district.label
        )
    }
}
