//! Message overrides.

use std::collections::HashMap;

use crate::descriptor::RuleTag;

/// Trait for replacing built-in messages.
pub trait Translator: Send + Sync {
    /// Translate a failure into a message.
    ///
    /// # Arguments
    ///
    /// * `tag` - The rule that failed
    /// * `word` - The field name, already split into words
    /// * `param` - The rule parameter, `""` when absent
    ///
    /// Return `None` to keep the built-in message.
    fn translate(&self, tag: &RuleTag, word: &str, param: &str) -> Option<String>;
}

/// Template-based [`Translator`] keyed by rule tag.
///
/// Templates may use the `{word}` and `{param}` placeholders.
///
/// ```
/// use fieldspeak::{MessageOverrides, RuleTag, Translator};
///
/// let overrides = MessageOverrides::new().set("required", "Please fill in {word}");
///
/// assert_eq!(
///     overrides.translate(&RuleTag::Required, "Old password", ""),
///     Some("Please fill in Old password".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageOverrides {
    templates: HashMap<RuleTag, String>,
}

impl MessageOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the message for one tag.
    pub fn set(mut self, tag: impl Into<RuleTag>, template: impl Into<String>) -> Self {
        self.templates.insert(tag.into(), template.into());
        self
    }

    /// Number of overridden tags.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if no tag is overridden.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Translator for MessageOverrides {
    fn translate(&self, tag: &RuleTag, word: &str, param: &str) -> Option<String> {
        self.templates
            .get(tag)
            .map(|template| template.replace("{word}", word).replace("{param}", param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_placeholders() {
        let overrides = MessageOverrides::new().set("gte", "{word} needs {param}+");

        assert_eq!(
            overrides.translate(&RuleTag::Gte, "Name", "2"),
            Some("Name needs 2+".to_string())
        );
    }

    #[test]
    fn missing_tag_is_none() {
        let overrides = MessageOverrides::new().set("gte", "{word} needs {param}+");

        assert_eq!(overrides.translate(&RuleTag::Lte, "Name", "2"), None);
    }

    #[test]
    fn unknown_tags_can_be_overridden() {
        let overrides = MessageOverrides::new().set("uuid5", "{word} must be a UUID");

        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides.translate(&RuleTag::parse("uuid5"), "Visitor id", ""),
            Some("Visitor id must be a UUID".to_string())
        );
    }
}
