//! Real name derivation.
//!
//! The real name is computed once per invocation and shared by every slot of
//! every file in a bundle, so a component and its container always agree on
//! casing.

use std::fmt;
use std::ops::Deref;

/// Element name after optional capitalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealName(String);

impl RealName {
    /// Derives the real name from the raw element name.
    ///
    /// # Examples
    /// ```ignore
    /// assert_eq!(RealName::derive("myThing", true).as_str(), "MyThing");
    /// assert_eq!(RealName::derive("myThing", false).as_str(), "myThing");
    /// ```
    pub fn derive(raw: &str, capitalize: bool) -> Self {
        if capitalize {
            Self(title_case(raw))
        } else {
            Self(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for RealName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercases the first letter of each whitespace-delimited word.
///
/// Only the leading character changes; whitespace is preserved as-is.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }

    out
}
