use serde::{Deserialize, Serialize};
use std::fmt;

use crate::versions;

/// Normalized display form of one verse, e.g. `John 3:16`.
///
/// Used as the cache key and as the path segment of the verse request, so two
/// references are the same verse exactly when their strings are equal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CanonicalReference(String);

impl CanonicalReference {
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub code: String,
    pub full_name: String,
    pub text: String,
}

impl TranslationRecord {
    /// Builds a record, resolving the display name from the version table.
    /// Unknown codes keep the code itself as their name.
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        let code = code.into();
        let full_name = versions::display_name(&code);
        Self {
            code,
            full_name,
            text: text.into(),
        }
    }

    /// `NIV • New International Version`, or just the code when no name is known.
    pub fn label(&self) -> String {
        if self.full_name == self.code {
            self.code.clone()
        } else {
            format!("{} • {}", self.code, self.full_name)
        }
    }
}

/// Every translation of one verse, in the order the site listed them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub reference: CanonicalReference,
    pub translations: Vec<TranslationRecord>,
}

impl LookupResult {
    pub fn new(reference: CanonicalReference, translations: Vec<TranslationRecord>) -> Self {
        Self {
            reference,
            translations,
        }
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Plain text: the reference as an upper-case heading, then one labelled,
/// indented block per translation.
impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.reference.as_str().to_uppercase())?;
        for t in &self.translations {
            write!(f, "\n{}\n  {}\n", t.label(), t.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_keeps_abbreviation_as_name() {
        let r = TranslationRecord::new("ZZZ", "text");
        assert_eq!(r.full_name, "ZZZ");
        assert_eq!(r.label(), "ZZZ");
    }

    #[test]
    fn known_code_label_includes_full_name() {
        let r = TranslationRecord::new("NIV", "For God so loved the world");
        assert_eq!(r.full_name, "New International Version");
        assert_eq!(r.label(), "NIV • New International Version");
    }

    #[test]
    fn result_displays_heading_then_labelled_blocks() {
        let r = LookupResult::new(
            CanonicalReference::new("John 11:35"),
            vec![
                TranslationRecord::new("KJV", "Jesus wept."),
                TranslationRecord::new("ZZZ", "He wept."),
            ],
        );
        assert_eq!(
            r.to_string(),
            "JOHN 11:35\n\nKJV • King James Version\n  Jesus wept.\n\nZZZ\n  He wept.\n"
        );
    }

    #[test]
    fn reference_serializes_as_plain_string() {
        let r = CanonicalReference::new("John 3:16");
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"John 3:16\"");
        assert_eq!(r.to_string(), "John 3:16");
    }
}
