//! Identifier tokenizer.
//!
//! Turns a code-style identifier (`OldPassword`, `visitorID`, `Artist[0]`)
//! into a naturally cased phrase (`Old password`, `Visitor id`,
//! `Artist [ 0 ]`).

use std::borrow::Cow;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Character class used to cut an identifier into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Lower,
    Upper,
    Digit,
    Other,
}

impl Class {
    /// Classify by general category: `Ll`, `Lu` and `Nd`. Titlecase, modifier
    /// and other letters (`ª`) and non-decimal numbers (`²`) are `Other`.
    fn of(c: char) -> Self {
        match get_general_category(c) {
            GeneralCategory::LowercaseLetter => Class::Lower,
            GeneralCategory::UppercaseLetter => Class::Upper,
            GeneralCategory::DecimalNumber => Class::Digit,
            _ => Class::Other,
        }
    }
}

/// A maximal run of characters sharing one [`Class`].
#[derive(Debug)]
struct Run {
    class: Class,
    chars: Vec<char>,
}

/// Split an identifier into a space-joined phrase.
///
/// The first word is capitalized, every following word is lower-cased.
/// Empty input yields an empty string.
///
/// ```
/// use fieldspeak::split;
///
/// assert_eq!(split("OldPassword"), "Old password");
/// assert_eq!(split("VisitorID"), "Visitor id");
/// ```
pub fn split(identifier: &str) -> String {
    let mut runs = runs(identifier);
    reattach(&mut runs);

    runs.iter()
        .filter(|run| !run.chars.is_empty())
        .enumerate()
        .map(|(index, run)| {
            if index == 0 {
                upper_first(&run.chars)
            } else {
                run.chars.iter().copied().map(lower_char).collect()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split raw bytes that are expected to hold an identifier.
///
/// Malformed UTF-8 is handed back untouched; no tokenization is attempted
/// on text that cannot be read.
pub fn split_bytes(identifier: &[u8]) -> Cow<'_, [u8]> {
    match std::str::from_utf8(identifier) {
        Ok(text) => Cow::Owned(split(text).into_bytes()),
        Err(_) => Cow::Borrowed(identifier),
    }
}

fn runs(identifier: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for c in identifier.chars() {
        let class = Class::of(c);
        match runs.last_mut() {
            Some(run) if run.class == class => run.chars.push(c),
            _ => runs.push(Run {
                class,
                chars: vec![c],
            }),
        }
    }

    runs
}

/// Move the trailing capital of an upper run onto the lower run after it.
///
/// Single left-to-right pass. A run that starts out as `Upper` may end up
/// empty, in which case it is dropped by the caller.
fn reattach(runs: &mut [Run]) {
    for i in 1..runs.len() {
        let (head, tail) = runs.split_at_mut(i);
        let upper = &mut head[i - 1];
        let lower = &mut tail[0];

        if upper.class != Class::Upper || lower.class != Class::Lower {
            continue;
        }
        if let Some(c) = upper.chars.pop() {
            lower.chars.insert(0, c);
        }
    }
}

fn upper_first(chars: &[char]) -> String {
    match chars.split_first() {
        Some((first, rest)) => std::iter::once(upper_char(*first))
            .chain(rest.iter().copied())
            .collect(),
        None => String::new(),
    }
}

// Case mapping is one codepoint in, one codepoint out. A character whose
// upper-case form spans several codepoints (`ß`, `ﬁ`) is kept as is.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// `İ` lower-cases to `i` followed by a combining dot; only the base letter is kept.
fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
