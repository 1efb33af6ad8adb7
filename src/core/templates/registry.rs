//! Process-wide registry mapping type keys to template bundles.
//!
//! The registry is built once on first use and never mutated. Canonical keys
//! and their aliases resolve to the same [`ElementKind`], and therefore to the
//! same `&'static` bundle.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::kind::ElementKind;
use super::types::TemplateBundle;
use crate::core::error::{Error, Result};

static REGISTRY: Lazy<TemplateRegistry> = Lazy::new(TemplateRegistry::builtin);

/// Immutable lookup table from type key to element kind
#[derive(Debug)]
pub struct TemplateRegistry {
    entries: BTreeMap<&'static str, ElementKind>,
}

impl TemplateRegistry {
    /// Returns the shared registry
    pub fn global() -> &'static TemplateRegistry {
        &REGISTRY
    }

    fn builtin() -> Self {
        let entries = ElementKind::all()
            .flat_map(|kind| [(kind.as_str(), kind), (kind.alias(), kind)])
            .collect();
        Self { entries }
    }

    /// Resolves a type key to its template bundle (exact, case-sensitive)
    pub fn resolve(&self, key: &str) -> Result<&'static TemplateBundle> {
        self.entries
            .get(key)
            .map(|kind| kind.bundle())
            .ok_or_else(|| Error::UnknownElementType {
                key: key.to_string(),
                valid_keys: self.keys().collect::<Vec<_>>().join(", "),
            })
    }

    /// All valid keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Keys pointing at `kind`, canonical name first
    pub fn keys_for(&self, kind: ElementKind) -> Vec<&'static str> {
        vec![kind.as_str(), kind.alias()]
            .into_iter()
            .filter(|key| self.entries.get(key) == Some(&kind))
            .collect()
    }
}
