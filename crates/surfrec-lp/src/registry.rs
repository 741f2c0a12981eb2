// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Named backend constructors.
//!
//! A `BackendRegistry` maps names to `BackendFactory` closures. It is an
//! ordinary value: callers build one, pick a factory, and pass that factory
//! to whatever formulates programs. Nothing is registered globally.

use crate::{backend::SolverBackend, microlp::MicrolpBackend};
use std::sync::Arc;

/// Builds a fresh, uninitialized backend on every call.
pub type BackendFactory = Arc<dyn Fn() -> Box<dyn SolverBackend> + Send + Sync>;

/// An ordered list of named backend factories.
///
/// The first registered backend is the default.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    entries: Vec<(String, BackendFactory)>,
}

impl BackendRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the backends shipped with this crate.
    /// `microlp` is registered first and is therefore the default.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_factory(MicrolpBackend::NAME, MicrolpBackend::factory());
        registry
    }

    /// Registers `factory` under `name`, replacing an entry of the same name
    /// in place.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn SolverBackend> + Send + Sync + 'static,
    {
        self.register_factory(name, Arc::new(factory));
    }

    /// Registers an already shared factory under `name`.
    pub fn register_factory(&mut self, name: impl Into<String>, factory: BackendFactory) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((name, factory)),
        }
    }

    /// Returns the factory registered under `name`.
    #[inline]
    pub fn factory(&self, name: &str) -> Option<BackendFactory> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| Arc::clone(f))
    }

    /// Builds a fresh backend registered under `name`.
    #[inline]
    pub fn create(&self, name: &str) -> Option<Box<dyn SolverBackend>> {
        self.factory(name).map(|f| f())
    }

    /// The names of all registered backends, in registration order.
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// The first registered factory.
    #[inline]
    pub fn default_factory(&self) -> Option<BackendFactory> {
        self.entries.first().map(|(_, f)| Arc::clone(f))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_default_is_microlp() {
        let registry = BackendRegistry::with_builtin();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["microlp"]);
        assert_eq!(registry.create("microlp").map(|b| b.name()), Some("microlp"));
        assert!(registry.create("gurobi").is_none());

        let backend = registry.default_factory().map(|f| f());
        assert_eq!(backend.map(|b| b.name()), Some("microlp"));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = BackendRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.default_factory().is_none());

        registry.register("first", || Box::new(MicrolpBackend::new()));
        registry.register("second", || Box::new(MicrolpBackend::new()));
        registry.register("first", || Box::new(MicrolpBackend::new()));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(format!("{:?}", registry), "[\"first\", \"second\"]");
    }
}
