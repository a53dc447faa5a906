//! Resolution chain used for loop detection and diagnostics

use super::TypeKey;
use crate::constants::{CHAIN_SEPARATOR, MIN_LOOP_CHAIN_LEN};
use std::fmt;

/// Ordered sequence of types being resolved
///
/// The chain only grows by copy: [`ResolutionChain::extended`] returns a new
/// chain and leaves the receiver untouched, so sibling resolutions never see
/// each other's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionChain(Vec<TypeKey>);

impl ResolutionChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain holding a single root key
    pub fn root(key: TypeKey) -> Self {
        Self(vec![key])
    }

    /// Copy of this chain with `key` appended
    #[must_use]
    pub fn extended(&self, key: TypeKey) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend_from_slice(&self.0);
        keys.push(key);
        Self(keys)
    }

    /// Whether the last key already appears earlier in the chain
    pub fn closes_loop(&self) -> bool {
        if self.0.len() < MIN_LOOP_CHAIN_LEN {
            return false;
        }
        match self.0.split_last() {
            Some((last, earlier)) => earlier.contains(last),
            None => false,
        }
    }

    /// The key currently being resolved
    pub fn last(&self) -> Option<TypeKey> {
        self.0.last().copied()
    }

    pub fn contains(&self, key: TypeKey) -> bool {
        self.0.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[TypeKey] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeKey> {
        self.0.iter()
    }
}

impl fmt::Display for ResolutionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(CHAIN_SEPARATOR)?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromIterator<TypeKey> for ResolutionChain {
    fn from_iter<I: IntoIterator<Item = TypeKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResolutionChain {
    type Item = &'a TypeKey;
    type IntoIter = std::slice::Iter<'a, TypeKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
