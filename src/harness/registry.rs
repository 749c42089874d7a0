//! Case registry
//!
//! A read-only mapping from case name to [`TestCase`], populated once at
//! startup from the compiled-in fixture modules. There is no hidden global
//! mutable state: the registry is an ordinary value the caller owns.

use std::collections::BTreeMap;

use crate::error::{ExactoError, ExactoResult};
use crate::fixtures;
use crate::harness::TestCase;

/// Immutable name-to-case registry with stable (sorted) iteration order
#[derive(Debug, Clone)]
pub struct Registry {
    cases: BTreeMap<String, TestCase>,
}

impl Registry {
    /// Build the registry of compiled-in fixture cases
    ///
    /// # Errors
    ///
    /// Any fixture whose buffers disagree with its configuration fails
    /// construction; a registry is either fully valid or not built.
    pub fn builtin() -> ExactoResult<Self> {
        Self::from_cases(fixtures::all_cases()?)
    }

    /// Build a registry from explicit cases (duplicate names rejected)
    ///
    /// # Errors
    ///
    /// Two cases sharing a name is a fixture error.
    pub fn from_cases(cases: Vec<TestCase>) -> ExactoResult<Self> {
        let mut map = BTreeMap::new();
        for case in cases {
            let name = case.name().to_string();
            if map.insert(name.clone(), case).is_some() {
                return Err(ExactoError::Fixture(format!("duplicate case name {name}")));
            }
        }
        Ok(Self { cases: map })
    }

    /// Look up one case by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TestCase> {
        self.cases.get(name)
    }

    /// Case names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    /// All cases in name order
    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.values()
    }

    /// Number of registered cases
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
