//! Explicitly constructed rendering service.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::FailureDescriptor;
use crate::render::render;
use crate::report::ErrorReport;
use crate::split::split;
use crate::translate::Translator;

/// Renders failures, consulting an optional [`Translator`] before the
/// built-in messages.
///
/// Holds no mutable state; share it freely across threads.
///
/// ## Example
///
/// ```rust
/// use fieldspeak::{FailureDescriptor, Humanizer, MessageOverrides};
///
/// let humanizer = Humanizer::new()
///     .translator(MessageOverrides::new().set("required", "Please enter {word}"));
///
/// let failure = FailureDescriptor::new("OldPassword", "required");
/// assert_eq!(humanizer.render(&failure), "Please enter Old password");
/// ```
#[derive(Clone, Default)]
pub struct Humanizer {
    translator: Option<Arc<dyn Translator>>,
}

impl Humanizer {
    /// Create a humanizer that only uses the built-in messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the translator.
    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Set the translator from an Arc.
    pub fn translator_arc(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Render one failure.
    pub fn render(&self, failure: &FailureDescriptor) -> String {
        if let Some(translator) = &self.translator {
            let word = split(&failure.field);
            if let Some(message) = translator.translate(&failure.tag, &word, failure.param()) {
                return message;
            }
        }
        render(failure)
    }

    /// Render every failure into a report. A field that fails more than once
    /// keeps the message of its last failure.
    pub fn report<'a, I>(&self, failures: I) -> ErrorReport
    where
        I: IntoIterator<Item = &'a FailureDescriptor>,
    {
        let mut report = ErrorReport::new();
        for failure in failures {
            report.insert(failure.field.clone(), self.render(failure));
        }
        report
    }
}

impl fmt::Debug for Humanizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Humanizer")
            .field("has_translator", &self.translator.is_some())
            .finish()
    }
}
