use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use tracing::warn;

use super::{Iter, Keys, Values};
use crate::util::error::TableFullError;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

/// The capacity of a HashTable created without one.
pub const DEFAULT_CAP: usize = 10;

/// A map of keys to values, stored in a fixed number of slots using open addressing with linear
/// probing.
///
/// The capacity is chosen at construction and never changes. Once every slot is occupied,
/// inserting a new key fails with [`TableFullError`]; inserting an existing key still replaces its
/// value.
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashTable.
/// - `c`: The capacity of the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(c)` |
/// | `get` | `O(1)`*, `O(c)` |
/// | `remove` | `O(1)`*, `O(c)` |
/// | `contains` | `O(1)`*, `O(c)` |
/// | `iter` | `O(c)` |
///
/// \* When keys collide, these functions probe the following slots until they find the key or an
/// empty slot. As the table fills up, clusters of occupied slots grow and so does the probing time.
pub struct HashTable<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] slots and the default value for `B`.
    pub fn new() -> HashTable<K, V, B> {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashTable with the provided `cap`acity and the default value for `B`.
    pub fn with_cap(cap: usize) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] slots and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new HashTable with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashTable<K, V, B> {
        HashTable {
            buckets: (0..cap).map(|_| None).collect(),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed number of slots in the HashTable.
    pub const fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if every slot is occupied.
    pub const fn is_full(&self) -> bool {
        self.len() == self.cap()
    }

    /// Inserts the provided `key`-`value` pair into the HashTable. If the key was already
    /// associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Errors
    /// Returns [`TableFullError`] if the key isn't present and there is no empty slot for it.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TableFullError> {
        let index = self.find_index_for_key(&key).ok_or(TableFullError { cap: self.cap() })?;

        // The bucket at index is either empty or contains an equal key.
        match &mut self.buckets[index] {
            Some(existing) => Ok(Some(mem::replace(&mut existing.1, value))),
            None => {
                self.buckets[index] = Some((key, value));
                self.len += 1;
                Ok(None)
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry,
    /// in which case a warning is logged.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q represents a borrowed version of K where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let entry = self.find_entry(key);
        if entry.is_none() {
            warn!(?key, "An element with the provided key was not found.");
        }
        entry
    }

    /// Returns a reference to the value associated with the provided `key` or None if the table
    /// contains no value for `key`. A warning is logged if it doesn't.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// table contains no value for `key`. A warning is logged if it doesn't.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let found = self.find_index_for_key(key)
            .filter(|index| self.buckets[*index].is_some());

        let Some(index) = found else {
            warn!(?key, "An element with the provided key was not found.");
            return None;
        };

        self.buckets[index].as_mut().map(|existing| &mut existing.1)
    }

    /// Removes the entry associated with `key`, returning it if it exists. A warning is logged if
    /// it doesn't.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let removed = self.find_index_for_key(key)
            .and_then(|index| Some((index, self.buckets[index].take()?)));

        let Some((mut hole, entry)) = removed else {
            warn!(?key, "An element with the provided key was not found.");
            return None;
        };
        self.len -= 1;

        // Shift later entries of the same cluster back into the hole, so that lookups never stop
        // early at it. An entry can't move if its ideal index lies cyclically within
        // (hole, next], as it would then sit before its ideal index.
        // UNCHECKED: An entry was found, so the cap is not 0.
        let mut next = (hole + 1) % self.cap();

        while let Some((next_key, _)) = &self.buckets[next] {
            // UNREACHABLE: The cap is not 0.
            let ideal = self.index_from_key(next_key).unreachable();

            let stays = if hole <= next {
                hole < ideal && ideal <= next
            } else {
                hole < ideal || ideal <= next
            };

            if !stays {
                self.buckets[hole] = self.buckets[next].take();
                hole = next;
            }

            next = (next + 1) % self.cap();
        }

        Some(entry)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).is_some()
    }

    /// Removes every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|bucket| *bucket = None);
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in slot order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in slot order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in slot order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Calculates the ideal index of a bucket for the provided `hashable` (or None if the
    /// HashTable has 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashTable::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Looks up the entry for `key` without logging anything if it is missing.
    pub(crate) fn find_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the table doesn't contain the key.
        self.buckets[index].as_ref().map(|existing| (&existing.0, &existing.1))
    }

    /// Finds the first index for the provided `key` which is either empty or holds an equal key,
    /// probing forwards from the ideal index and wrapping at the capacity. Returns None if the
    /// HashTable has 0 capacity, or if every slot is occupied by other keys.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        for _ in 0..self.cap() {
            match &self.buckets[index] {
                Some(existing) if existing.0.borrow() != key => {
                    index = (index + 1) % self.cap();
                },
                _ => return Some(index),
            }
        }

        None
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashTable<K, V, B> {
    fn clone(&self) -> Self {
        HashTable {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<_> = self.buckets.iter()
            .map(|o| DebugRaw(match o {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            }))
            .collect();

        f.debug_struct("HashTable")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "The table is empty.");
        }

        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}
