//! Unit vocabulary for count-style messages.

use crate::descriptor::ValueKind;

/// Resolve the noun counted by `param` for a value of the given kind.
///
/// `param` that does not parse as an integer is treated as a plural count.
pub fn unit(kind: ValueKind, param: &str) -> &'static str {
    let singular = matches!(param.parse::<i64>(), Ok(count) if count < 2);

    match (kind, singular) {
        (ValueKind::Sequence, true) => "entry",
        (ValueKind::Sequence, false) => "entries",
        (ValueKind::String, true) => "character",
        (ValueKind::String, false) => "characters",
        (ValueKind::Other, _) => "unknown",
    }
}
