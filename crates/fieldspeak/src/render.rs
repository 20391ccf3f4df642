//! Message synthesis.

use crate::descriptor::{FailureDescriptor, RuleTag};
use crate::split::split;
use crate::unit::unit;

/// Render a failure into an end-user sentence.
///
/// Every descriptor produces a message. Tags without a dedicated template
/// fall back to `"{word} is not valid"`.
///
/// ```
/// use fieldspeak::{render, FailureDescriptor, ValueKind};
///
/// let failure = FailureDescriptor::new("OldPassword", "gte")
///     .with_param("8")
///     .with_kind(ValueKind::String);
///
/// assert_eq!(render(&failure), "Old password must contain at least 8 characters");
/// ```
pub fn render(failure: &FailureDescriptor) -> String {
    let word = split(&failure.field);
    let param = failure.param();

    tracing::trace!(field = %failure.field, tag = %failure.tag, "rendering failure");

    match &failure.tag {
        RuleTag::Required => format!("{word} is required"),
        RuleTag::Max => format!("{word} cannot be longer than {param}"),
        RuleTag::Min => format!("{word} must be longer than {param}"),
        RuleTag::Email => "Invalid email format".to_string(),
        RuleTag::Len => format!("{word} must be {param} characters long"),
        RuleTag::Lte => format!(
            "{word} must contain no more than {param} {}",
            unit(failure.kind, param)
        ),
        RuleTag::Gte => format!(
            "{word} must contain at least {param} {}",
            unit(failure.kind, param)
        ),
        RuleTag::Alphanum => format!("{word} must be alphanumeric"),
        RuleTag::NeField => format!("{word} must not be the same as {}", split(param)),
        RuleTag::Excludes => format!("{word} must not be '{param}'"),
        RuleTag::ExcludesRune => format!("{word} must not contain '{param}'"),
        RuleTag::EqField => format!("{word} must match {param}"),
        RuleTag::Uuid4 => format!("{word} is not a valid uuidv4"),
        RuleTag::Unknown(tag) => {
            tracing::debug!(
                field = %failure.field,
                tag = %tag,
                "no template for rule tag, using fallback"
            );
            format!("{word} is not valid")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ValueKind;

    fn failure(field: &str, tag: &str) -> FailureDescriptor {
        FailureDescriptor::new(field, tag)
    }

    #[test]
    fn required() {
        assert_eq!(render(&failure("Make", "required")), "Make is required");
        assert_eq!(
            render(&failure("PasswordConfirm", "required")),
            "Password confirm is required"
        );
    }

    #[test]
    fn max_and_min() {
        assert_eq!(
            render(&failure("Email", "max").with_param("100")),
            "Email cannot be longer than 100"
        );
        assert_eq!(
            render(&failure("BandName", "min").with_param("3")),
            "Band name must be longer than 3"
        );
    }

    #[test]
    fn email_ignores_field() {
        assert_eq!(render(&failure("ContactEmail", "email")), "Invalid email format");
    }

    #[test]
    fn len() {
        assert_eq!(
            render(&failure("ZipCode", "len").with_param("5")),
            "Zip code must be 5 characters long"
        );
    }

    #[test]
    fn gte_and_lte_pluralize() {
        let artist = failure("Artist", "gte")
            .with_param("1")
            .with_kind(ValueKind::Sequence);
        assert_eq!(render(&artist), "Artist must contain at least 1 entry");

        let artist = failure("Artist", "lte")
            .with_param("5")
            .with_kind(ValueKind::Sequence);
        assert_eq!(render(&artist), "Artist must contain no more than 5 entries");

        let password = failure("OldPassword", "gte")
            .with_param("8")
            .with_kind(ValueKind::String);
        assert_eq!(
            render(&password),
            "Old password must contain at least 8 characters"
        );

        let count = failure("BandMembers", "lte").with_param("8");
        assert_eq!(
            render(&count),
            "Band members must contain no more than 8 unknown"
        );
    }

    #[test]
    fn alphanum() {
        assert_eq!(
            render(&failure("Username", "alphanum")),
            "Username must be alphanumeric"
        );
    }

    #[test]
    fn nefield_splits_referenced_field() {
        assert_eq!(
            render(&failure("Password", "nefield").with_param("OldPassword")),
            "Password must not be the same as Old password"
        );
    }

    #[test]
    fn eqfield_keeps_param_verbatim() {
        assert_eq!(
            render(&failure("PasswordConfirm", "eqfield").with_param("Password")),
            "Password confirm must match Password"
        );
        assert_eq!(
            render(&failure("PasswordConfirm", "eqfield").with_param("NewPassword")),
            "Password confirm must match NewPassword"
        );
    }

    #[test]
    fn excludes() {
        assert_eq!(
            render(&failure("Password", "excludes").with_param("password")),
            "Password must not be 'password'"
        );
        assert_eq!(
            render(&failure("Password", "excludesrune").with_param("^")),
            "Password must not contain '^'"
        );
    }

    #[test]
    fn uuid4() {
        assert_eq!(
            render(&failure("VisitorID", "uuid4")),
            "Visitor id is not a valid uuidv4"
        );
    }

    #[test]
    fn unknown_tag_falls_back() {
        assert_eq!(render(&failure("X", "bogus_tag")), "X is not valid");
        assert_eq!(render(&failure("Source", "eq")), "Source is not valid");
    }

    #[test]
    fn missing_param_renders_empty() {
        assert_eq!(
            render(&failure("Make", "max")),
            "Make cannot be longer than "
        );
    }
}
