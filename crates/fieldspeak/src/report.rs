//! Field-to-message report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::descriptor::FailureDescriptor;
use crate::render::render;

/// Key under which a message that belongs to no field is stored.
pub const GENERAL_KEY: &str = "msg";

/// Rendered messages keyed by the original field identifier.
///
/// Serializes as a flat JSON object with sorted keys:
///
/// ```json
/// {
///   "OldPassword": "Old password is required",
///   "Username": "Username must be alphanumeric"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed: {} field error(s)", .messages.len())]
pub struct ErrorReport {
    messages: BTreeMap<String, String>,
}

impl ErrorReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every failure. A field that fails more than once keeps the
    /// message of its last failure.
    pub fn from_failures<'a, I>(failures: I) -> Self
    where
        I: IntoIterator<Item = &'a FailureDescriptor>,
    {
        let mut report = Self::new();
        for failure in failures {
            report.insert(failure.field.clone(), render(failure));
        }
        report
    }

    /// Store a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(field.into(), message.into());
    }

    /// Store a message that belongs to no particular field.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.insert(GENERAL_KEY, message);
    }

    /// Get the message for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    /// Check if there are any messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert to Result - Ok if no messages, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<'a> FromIterator<&'a FailureDescriptor> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = &'a FailureDescriptor>>(iter: I) -> Self {
        Self::from_failures(iter)
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
