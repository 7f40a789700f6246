use crate::skiplist::skipnode::{Link, Node, NodeId};
use crate::skiplist::SkipListIter;
use crate::utils::random::RandomGenerator;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Probability of a node joining the next level is 1/BRANCHING.
const BRANCHING: u32 = 2;

/// Outcome of `SkipList::insert`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStatus {
    Inserted,
    /// The key was already present, the stored value is left untouched.
    AlreadyExists,
}

/// An ordered key/value index built as a probabilistic multi-level linked list.
///
/// Nodes live in an arena owned by the list and link to each other by slot
/// index. The header is not stored in the arena, it is the `head` array of
/// `max_level + 1` forward links and a `None` position always refers to it.
pub struct SkipList<K, V, R>
where
    R: RandomGenerator,
{
    max_level: usize,
    // Highest level used so far. Deleting never lowers it.
    current_level: usize,
    head: Vec<Link>,
    nodes: Vec<Option<Node<K, V>>>,
    // Released slots, reused by the next insert.
    free: Vec<NodeId>,
    element_count: usize,
    rnd: R,
}

impl<K, V, R> SkipList<K, V, R>
where
    K: Ord,
    R: RandomGenerator,
{
    /// Create an empty list whose nodes never exceed `max_level`.
    /// `max_level` is not validated, keep it around log2 of the expected size.
    pub fn new(max_level: usize, rnd: R) -> Self {
        SkipList {
            max_level,
            current_level: 0,
            head: vec![None; max_level + 1],
            nodes: Vec::new(),
            free: Vec::new(),
            element_count: 0,
            rnd,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.element_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    /// The highest level currently in use.
    #[inline]
    pub fn level(&self) -> usize {
        self.current_level
    }

    #[inline]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find_greater_or_equal(key, None) {
            Some(id) if self.key_cmp(id, key) == Ordering::Equal => Some(self.node(id).value()),
            _ => None,
        }
    }

    /// Replace the value of an existing key, returning the previous one.
    /// Absent keys are not inserted.
    pub fn set_value<Q>(&mut self, key: &Q, value: V) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find_greater_or_equal(key, None) {
            Some(id) if self.key_cmp(id, key) == Ordering::Equal => {
                Some(self.node_mut(id).set_value(value))
            }
            _ => None,
        }
    }

    /// Insert a new entry. An existing key is rejected without touching its value.
    pub fn insert(&mut self, key: K, value: V) -> InsertStatus {
        let mut update = vec![None; self.max_level + 1];
        if let Some(id) = self.find_greater_or_equal(&key, Some(update.as_mut_slice())) {
            if *self.node(id).key() == key {
                return InsertStatus::AlreadyExists;
            }
        }

        let level = self.get_random_level();
        if level > self.current_level {
            // update[current_level + 1..=level] still holds `None`, which is the header.
            self.current_level = level;
        }

        // Allocate before touching any link.
        let id = self.alloc(Node::new(key, value, level));
        for (i, prev) in update.iter().enumerate().take(level + 1) {
            let next = self.next_of(*prev, i);
            self.node_mut(id).set_next(i, next);
            self.set_next_of(*prev, i, Some(id));
        }
        self.element_count += 1;
        InsertStatus::Inserted
    }

    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Unlink `key` from every level it occupies and hand back its entry.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut update = vec![None; self.max_level + 1];
        let target = match self.find_greater_or_equal(key, Some(update.as_mut_slice())) {
            Some(id) if self.key_cmp(id, key) == Ordering::Equal => id,
            _ => return None,
        };

        for (i, prev) in update.iter().enumerate().take(self.current_level + 1) {
            // Levels are nested, once the target is missing here it is missing above.
            if self.next_of(*prev, i) != Some(target) {
                break;
            }
            debug_assert!(i <= self.node(target).level());
            let next = self.node(target).get_next(i);
            self.set_next_of(*prev, i, next);
        }
        self.element_count -= 1;
        Some(self.release(target).into_entry())
    }

    /// Draw a level with P(level >= k) = 2^-(k-1), capped at `max_level`.
    pub fn get_random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rnd.one_in(BRANCHING) {
            level += 1;
        }
        level.min(self.max_level)
    }

    /// Release every node by walking level 0 once, then empty the header.
    pub fn clear(&mut self) {
        let mut released = 0;
        let mut cur = self.head[0];
        while let Some(id) = cur {
            cur = self.release(id).get_next(0);
            released += 1;
        }
        debug_assert_eq!(released, self.element_count);

        self.head.iter_mut().for_each(|l| *l = None);
        self.nodes.clear();
        self.free.clear();
        self.current_level = 0;
        self.element_count = 0;
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> SkipListIter<'_, K, V, R> {
        SkipListIter::new(self)
    }

    #[inline]
    fn key_cmp<Q>(&self, id: NodeId, key: &Q) -> Ordering
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let k: &Q = self.node(id).key().borrow();
        k.cmp(key)
    }

    /// Return the first node with a key >= `key`, or `None` if there is none.
    /// With `prev`, `prev[i]` receives the last position visited on level `i`.
    fn find_greater_or_equal<Q>(&self, key: &Q, mut prev: Option<&mut [Link]>) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut x: Link = None;
        let mut level = self.current_level;
        loop {
            let next = self.next_of(x, level);
            match next {
                Some(id) if self.key_cmp(id, key) == Ordering::Less => x = next,
                _ => {
                    if let Some(p) = prev.as_deref_mut() {
                        p[level] = x;
                    }
                    if level == 0 {
                        return next;
                    }
                    level -= 1;
                }
            }
        }
    }
}

impl<K, V, R> SkipList<K, V, R>
where
    R: RandomGenerator,
{
    pub(crate) fn first(&self) -> Link {
        self.head[0]
    }

    pub(crate) fn element_count(&self) -> usize {
        self.element_count
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        match self.nodes[id] {
            Some(ref n) => n,
            None => unreachable!("link to released slot {}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match self.nodes[id] {
            Some(ref mut n) => n,
            None => unreachable!("link to released slot {}", id),
        }
    }

    #[inline]
    fn next_of(&self, at: Link, level: usize) -> Link {
        match at {
            None => self.head[level],
            Some(id) => self.node(id).get_next(level),
        }
    }

    #[inline]
    fn set_next_of(&mut self, at: Link, level: usize, next: Link) {
        match at {
            None => self.head[level] = next,
            Some(id) => self.node_mut(id).set_next(level, next),
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        match self.nodes[id].take() {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => unreachable!("slot {} released twice", id),
        }
    }
}

impl<K, V, R> fmt::Display for SkipList<K, V, R>
where
    K: fmt::Display,
    V: fmt::Display,
    R: RandomGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..=self.current_level {
            write!(f, "Level {}: ", i)?;
            let mut cur = self.head[i];
            while let Some(id) = cur {
                let n = self.node(id);
                write!(f, "{};", n)?;
                cur = n.get_next(i);
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
