use std::fmt;
use std::fmt::{Error, Formatter};

/// Index of a node slot inside the list's arena.
pub type NodeId = usize;

/// A forward link, `None` marks the end of a level.
pub type Link = Option<NodeId>;

/// One key/value entry together with its successor on every level it joins.
/// A node created at `level` has `level + 1` forward slots.
pub struct Node<K, V> {
    key: K,
    value: V,
    forward: Vec<Link>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, level: usize) -> Self {
        Self {
            key,
            value,
            forward: vec![None; level + 1],
        }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replace the value in place. Key and level are fixed at creation.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.forward.len() - 1
    }

    #[inline]
    pub fn set_next(&mut self, n: usize, next: Link) {
        self.forward[n] = next;
    }

    #[inline]
    pub fn get_next(&self, n: usize) -> Link {
        self.forward[n]
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Node<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}:{}", self.key, self.value)
    }
}
