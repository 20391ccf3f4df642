//! Failure descriptors handed over by the validation layer.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Symbolic name of the validation rule that failed.
///
/// Tags are matched exactly and case-sensitively. Anything outside the known
/// set is kept verbatim in [`RuleTag::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleTag {
    /// `required`
    Required,
    /// `max`
    Max,
    /// `min`
    Min,
    /// `email`
    Email,
    /// `len`
    Len,
    /// `lte`
    Lte,
    /// `gte`
    Gte,
    /// `alphanum`
    Alphanum,
    /// `nefield`, the param names another field
    NeField,
    /// `excludes`
    Excludes,
    /// `excludesrune`
    ExcludesRune,
    /// `eqfield`, the param names another field
    EqField,
    /// `uuid4`
    Uuid4,
    /// Any tag without a dedicated template
    Unknown(String),
}

impl RuleTag {
    /// Parse a tag. Never fails; unrecognized tags become [`RuleTag::Unknown`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "required" => Self::Required,
            "max" => Self::Max,
            "min" => Self::Min,
            "email" => Self::Email,
            "len" => Self::Len,
            "lte" => Self::Lte,
            "gte" => Self::Gte,
            "alphanum" => Self::Alphanum,
            "nefield" => Self::NeField,
            "excludes" => Self::Excludes,
            "excludesrune" => Self::ExcludesRune,
            "eqfield" => Self::EqField,
            "uuid4" => Self::Uuid4,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The tag as the validation layer spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Max => "max",
            Self::Min => "min",
            Self::Email => "email",
            Self::Len => "len",
            Self::Lte => "lte",
            Self::Gte => "gte",
            Self::Alphanum => "alphanum",
            Self::NeField => "nefield",
            Self::Excludes => "excludes",
            Self::ExcludesRune => "excludesrune",
            Self::EqField => "eqfield",
            Self::Uuid4 => "uuid4",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether the tag has a dedicated template.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl FromStr for RuleTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for RuleTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<String> for RuleTag {
    fn from(tag: String) -> Self {
        match Self::parse(&tag) {
            Self::Unknown(_) => Self::Unknown(tag),
            known => known,
        }
    }
}

impl From<RuleTag> for String {
    fn from(tag: RuleTag) -> Self {
        match tag {
            RuleTag::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the value that failed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Text; counts are characters.
    String,
    /// Slice, array or map; counts are entries.
    Sequence,
    /// Anything else.
    #[default]
    Other,
}

/// One violated rule on one field.
///
/// ## JSON
///
/// ```json
/// {"field": "OldPassword", "tag": "gte", "param": "8", "kind": "string"}
/// ```
///
/// `param` and `kind` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDescriptor {
    /// Field identifier as declared in code
    pub field: String,
    /// Rule that failed
    pub tag: RuleTag,
    /// Rule parameter, e.g. the bound of `gte` or the field named by `eqfield`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Shape of the offending value
    #[serde(default)]
    pub kind: ValueKind,
}

impl FailureDescriptor {
    /// Create a descriptor without a parameter.
    pub fn new(field: impl Into<String>, tag: impl Into<RuleTag>) -> Self {
        Self {
            field: field.into(),
            tag: tag.into(),
            param: None,
            kind: ValueKind::Other,
        }
    }

    /// Set the rule parameter.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Set the value kind.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// The parameter, or `""` when the rule carries none.
    pub fn param(&self) -> &str {
        self.param.as_deref().unwrap_or("")
    }
}
