pub use skiplist::{InsertStatus, SkipList};
pub use skiplist_iter::SkipListIter;

mod skiplist;
mod skiplist_iter;
mod skipnode;

/// Default upper bound on node levels, enough for a few thousand entries
/// at the expected log2 height.
pub const K_MAX_HEIGHT: usize = 12;
