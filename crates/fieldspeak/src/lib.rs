//! # fieldspeak
//!
//! Turns machine-oriented validation failures into sentences an end user can
//! read. A failure names a field in code casing (`OldPassword`), the rule that
//! failed (`gte`) and an optional rule parameter (`8`); fieldspeak answers with
//! "Old password must contain at least 8 characters".
//!
//! fieldspeak does not validate anything itself. The validation layer detects
//! the failures and hands them over as [`FailureDescriptor`]s.
//!
//! ## Example
//!
//! ```rust
//! use fieldspeak::prelude::*;
//!
//! let failures = vec![
//!     FailureDescriptor::new("Make", "required"),
//!     FailureDescriptor::new("Password", "nefield").with_param("OldPassword"),
//!     FailureDescriptor::new("Artist", "gte")
//!         .with_param("1")
//!         .with_kind(ValueKind::Sequence),
//! ];
//!
//! let report = ErrorReport::from_failures(&failures);
//!
//! assert_eq!(report.get("Make"), Some("Make is required"));
//! assert_eq!(
//!     report.get("Password"),
//!     Some("Password must not be the same as Old password")
//! );
//! assert_eq!(report.get("Artist"), Some("Artist must contain at least 1 entry"));
//! ```
//!
//! ## Messages
//!
//! | tag | message |
//! |---|---|
//! | `required` | `{word} is required` |
//! | `max` | `{word} cannot be longer than {param}` |
//! | `min` | `{word} must be longer than {param}` |
//! | `email` | `Invalid email format` |
//! | `len` | `{word} must be {param} characters long` |
//! | `lte` | `{word} must contain no more than {param} {unit}` |
//! | `gte` | `{word} must contain at least {param} {unit}` |
//! | `alphanum` | `{word} must be alphanumeric` |
//! | `nefield` | `{word} must not be the same as {split(param)}` |
//! | `excludes` | `{word} must not be '{param}'` |
//! | `excludesrune` | `{word} must not contain '{param}'` |
//! | `eqfield` | `{word} must match {param}` |
//! | `uuid4` | `{word} is not a valid uuidv4` |
//! | anything else | `{word} is not valid` |

mod descriptor;
mod humanizer;
mod render;
mod report;
mod split;
mod translate;
mod unit;


pub use descriptor::{FailureDescriptor, RuleTag, ValueKind};
pub use humanizer::Humanizer;
pub use render::render;
pub use report::{ErrorReport, GENERAL_KEY};
pub use split::{split, split_bytes};
pub use translate::{MessageOverrides, Translator};
pub use unit::unit;

/// Prelude module for fieldspeak
pub mod prelude {
    pub use crate::descriptor::{FailureDescriptor, RuleTag, ValueKind};
    pub use crate::humanizer::Humanizer;
    pub use crate::render::render;
    pub use crate::report::ErrorReport;
    pub use crate::split::split;
    pub use crate::translate::{MessageOverrides, Translator};
}
