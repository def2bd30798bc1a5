//! Keyed registries of elements awaiting a counterpart.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::Direction;

/// Elements registered under a logical key, at most one per key.
#[derive(Debug)]
pub struct KeyedRegistry<K, E> {
    entries: HashMap<K, E>,
}

impl<K: Eq + Hash, E> KeyedRegistry<K, E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `element` under `key`, returning any entry it replaced.
    pub fn insert(&mut self, key: K, element: E) -> Option<E> {
        self.entries.insert(key, element)
    }

    /// Remove and return the entry for `key`. A given entry can be claimed
    /// at most once.
    pub fn claim(&mut self, key: &K) -> Option<E> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

impl<K: Eq + Hash, E> Default for KeyedRegistry<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The outgoing and incoming registries of one crossfade session.
#[derive(Debug)]
pub(crate) struct RegistryPair<K, E> {
    outgoing: KeyedRegistry<K, E>,
    incoming: KeyedRegistry<K, E>,
}

impl<K: Eq + Hash, E> RegistryPair<K, E> {
    pub(crate) fn new() -> Self {
        Self {
            outgoing: KeyedRegistry::new(),
            incoming: KeyedRegistry::new(),
        }
    }

    /// Registry holding elements that play in `direction`.
    pub(crate) fn side(&self, direction: Direction) -> &KeyedRegistry<K, E> {
        match direction {
            Direction::Intro => &self.incoming,
            Direction::Outro => &self.outgoing,
        }
    }

    pub(crate) fn side_mut(&mut self, direction: Direction) -> &mut KeyedRegistry<K, E> {
        match direction {
            Direction::Intro => &mut self.incoming,
            Direction::Outro => &mut self.outgoing,
        }
    }

    /// Registry a `direction` element looks in for its counterpart.
    pub(crate) fn opposite_mut(&mut self, direction: Direction) -> &mut KeyedRegistry<K, E> {
        match direction {
            Direction::Intro => &mut self.outgoing,
            Direction::Outro => &mut self.incoming,
        }
    }
}
