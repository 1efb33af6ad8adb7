//! Element kinds understood by the generator.
//!
//! Every kind owns exactly one template bundle and is reachable through two
//! registry keys: its canonical name and a single-letter alias.
//!
//! Key lookup itself lives in the registry, which is exact and
//! case-sensitive.

// Internal imports (std, crate)
use super::builtin::{ACTION_BUNDLE, COMPONENT_BUNDLE, REDUCER_BUNDLE};
use super::types::TemplateBundle;
use std::fmt;

// External imports (alphabetized)
use serde::Serialize;

/// Kind of front-end element to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// React component plus its redux container
    #[default]
    Component,
    /// Redux reducer module
    Reducer,
    /// Redux action creators module
    Action,
}

impl ElementKind {
    /// Returns the canonical registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Reducer => "reducer",
            Self::Action => "action",
        }
    }

    /// Returns the single-letter alias key
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Component => "c",
            Self::Reducer => "r",
            Self::Action => "a",
        }
    }

    /// Returns the compiled-in template bundle for this kind
    pub fn bundle(&self) -> &'static TemplateBundle {
        match self {
            Self::Component => &COMPONENT_BUNDLE,
            Self::Reducer => &REDUCER_BUNDLE,
            Self::Action => &ACTION_BUNDLE,
        }
    }

    /// Returns an iterator over all element kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use ElementKind::*;
        [Component, Reducer, Action].iter().copied()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
