use crate::skiplist::skipnode::Link;
use crate::skiplist::SkipList;
use crate::utils::random::RandomGenerator;

/// Walks level 0 from the header, yielding entries in ascending key order.
pub struct SkipListIter<'a, K, V, R>
where
    R: RandomGenerator,
{
    list: &'a SkipList<K, V, R>,
    node: Link,
    remaining: usize,
}

impl<'a, K, V, R> SkipListIter<'a, K, V, R>
where
    R: RandomGenerator,
{
    pub(crate) fn new(list: &'a SkipList<K, V, R>) -> Self {
        Self {
            list,
            node: list.first(),
            remaining: list.element_count(),
        }
    }
}

impl<'a, K, V, R> Iterator for SkipListIter<'a, K, V, R>
where
    R: RandomGenerator,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.node?;
        let n = self.list.node(id);
        self.node = n.get_next(0);
        self.remaining -= 1;
        Some((n.key(), n.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, R> ExactSizeIterator for SkipListIter<'a, K, V, R> where R: RandomGenerator {}

#[cfg(test)]
mod tests {
    use crate::skiplist::{InsertStatus, SkipList, K_MAX_HEIGHT};
    use crate::utils::random::{Random, RandomGenerator};

    #[test]
    fn test_basic() {
        let mut sl = SkipList::new(K_MAX_HEIGHT, Random::new(0xdead_beef));
        for i in (0..100u8).rev() {
            let _ = sl.insert(vec![i], i as u32);
        }

        let mut iter = sl.iter();
        assert_eq!(iter.len(), 100);
        assert_eq!(iter.next(), Some((&vec![0], &0)));
        assert_eq!(iter.next(), Some((&vec![1], &1)));
        assert_eq!(iter.len(), 98);
        assert_eq!(iter.last(), Some((&vec![99], &99)));
    }

    #[test]
    fn test_random() {
        let mut rnd = Random::new(3);
        let mut sl = SkipList::new(K_MAX_HEIGHT, Random::new(0xdead_beef));
        let mut s = vec![];
        for _ in 0..10000 {
            let k = rnd.next() as u8;
            if sl.insert(k, ()) == InsertStatus::Inserted {
                s.push(k);
            }
        }
        s.sort_unstable();
        let keys: Vec<u8> = sl.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, s);
    }
}
