use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::filter::TokenFilter;

/// Loosely-typed configuration mapping handed to filter constructors.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Constructor signature stored in a [`TokenFilterRegistry`].
pub type FilterConstructor = fn(&ConfigMap) -> Result<Box<dyn TokenFilter>>;

/// Explicit name-to-constructor registry owned by the composition root.
///
/// The host creates one registry, registers the filters it wants under
/// fixed names, and builds filter instances from per-field configuration at
/// setup time. The first registration under a name wins; a second is an
/// error.
#[derive(Debug, Default)]
pub struct TokenFilterRegistry {
    constructors: HashMap<String, FilterConstructor>,
}

impl TokenFilterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: FilterConstructor,
    ) -> Result<()> {
        match self.constructors.entry(name.into()) {
            Entry::Occupied(entry) => Err(Error::DuplicateFilter(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(constructor);
                Ok(())
            }
        }
    }

    /// Whether a filter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Builds a filter by registered name from `config`.
    pub fn build(&self, name: &str, config: &ConfigMap) -> Result<Box<dyn TokenFilter>> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| Error::UnknownFilter(name.to_string()))?;
        constructor(config)
    }
}
