use std::{
    borrow::Borrow,
    collections::VecDeque,
    hash::Hash,
    sync::{Mutex, PoisonError},
};

use dashmap::DashMap;
use log::debug;

/// Fixed-capacity memoization map safe to share between threads.
///
/// Once `capacity` distinct keys are stored, inserting a new key evicts
/// the oldest inserted one.
pub struct BoundedCache<K, V> {
    cache: DashMap<K, V>,
    insertion_order: Mutex<VecDeque<K>>,
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
            insertion_order: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.cache.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        // order queue lock is held for the whole insert so that the map and
        // the queue always hold the same keys
        let mut order = self
            .insertion_order
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.cache.insert(key.clone(), value).is_some() {
            return;
        }
        order.push_back(key);
        while order.len() > self.capacity {
            if let Some(oldest) = order.pop_front() {
                self.cache.remove(&oldest);
                debug!("Evicted oldest cache entry, capacity {}", self.capacity);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::BoundedCache;

    #[test]
    fn lookup_by_borrowed_key() {
        let cache = BoundedCache::<String, u64>::with_capacity(4);
        assert_eq!(cache.get("09977123456"), None);
        cache.insert("09977123456".to_owned(), 959977123456);
        assert_eq!(cache.get("09977123456"), Some(959977123456));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    fn evicts_oldest_entry() {
        let cache = BoundedCache::<u32, u32>::with_capacity(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(20));
        assert_eq!(cache.get(&3), Some(30));
    }

    #[test]
    fn reinserting_a_key_does_not_grow_the_cache() {
        let cache = BoundedCache::<u32, u32>::with_capacity(2);
        cache.insert(1, 10);
        cache.insert(1, 11);
        cache.insert(2, 20);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), Some(11));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = BoundedCache::<u32, u32>::with_capacity(0);
        cache.insert(1, 10);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.len(), 0);
    }
}
