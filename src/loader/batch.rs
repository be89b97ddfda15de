//! Batched placeholder loading.

use super::Lazy;
use crate::debug;
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;
use std::sync::Arc;

type BatchFn<K, V> = dyn Fn(Vec<K>) -> Vec<(K, V)> + Send + Sync;

/// Collects keys and loads them together.
///
/// Every [`load`](Self::load) returns a placeholder immediately. The batch
/// function runs when some placeholder is first forced, receiving every key
/// requested since the previous batch. Keys the batch does not return settle
/// as empty.
///
/// The batch function must not call back into the same loader.
///
/// # Example
///
/// ```ignore
/// let loader = BatchLoader::new(|ids: Vec<u64>| find_projects(&ids));
/// let a = loader.load(1);
/// let b = loader.load(2);
/// a.force(); // one batch call with [1, 2]
/// b.force(); // already loaded
/// ```
pub struct BatchLoader<K, V> {
    shared: Arc<Shared<K, V>>,
}

struct Shared<K, V> {
    batch: Box<BatchFn<K, V>>,
    state: Mutex<State<K, V>>,
}

struct State<K, V> {
    pending: FxHashSet<K>,
    loaded: FxHashMap<K, V>,
    batches: usize,
}

impl<K, V> BatchLoader<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(batch: impl Fn(Vec<K>) -> Vec<(K, V)> + Send + Sync + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                batch: Box::new(batch),
                state: Mutex::new(State {
                    pending: FxHashSet::default(),
                    loaded: FxHashMap::default(),
                    batches: 0,
                }),
            }),
        }
    }

    /// Request `key`, returning a placeholder for its value.
    pub fn load(&self, key: K) -> Lazy<V> {
        {
            let mut state = self.shared.state.lock();
            if !state.loaded.contains_key(&key) {
                state.pending.insert(key.clone());
            }
        }

        let shared = Arc::clone(&self.shared);
        Lazy::new(move || shared.fetch(&key))
    }

    /// Number of batch calls made so far.
    pub fn batches(&self) -> usize {
        self.shared.state.lock().batches
    }
}

impl<K, V> Clone for BatchLoader<K, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Shared<K, V> {
    fn fetch(&self, key: &K) -> Option<V> {
        let mut state = self.state.lock();
        if !state.pending.is_empty() {
            let keys: Vec<K> = state.pending.drain().collect();
            debug!("loader"; "batch loading {} keys", keys.len());
            let results = (self.batch)(keys);
            state.loaded.extend(results);
            state.batches += 1;
        }
        state.loaded.get(key).cloned()
    }
}
