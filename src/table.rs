use std::fmt::Display;

use crate::hash::hash;

/// One key/value node in a bucket's chain. The chain is owned end to end:
/// the bucket owns its head and each node owns its successor.
struct Entry {
    key: String,
    value: String,
    next: Option<Box<Entry>>,
}

impl Entry {
    fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
            next: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    InvalidCapacity,
}

impl Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::InvalidCapacity => write!(f, "capacity must be positive"),
        }
    }
}

impl std::error::Error for TableError {}

/// A fixed-bucket-count hash table over string keys and values, resolving
/// collisions by separate chaining. The bucket count never changes for a
/// given table; `resize` consumes the table and builds a doubled one.
pub struct HashTable {
    capacity: usize,
    buckets: Vec<Option<Box<Entry>>>,
}

impl HashTable {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            buckets: (0..capacity).map(|_| None).collect(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `key` → `value`. If the key is already present its value is
    /// replaced in place; otherwise a new entry is appended at the tail of
    /// the key's chain. A key never appears twice in the table.
    pub fn insert(&mut self, key: &str, value: &str) {
        let index = hash(key, self.capacity);
        let mut cur = &mut self.buckets[index];
        loop {
            match cur {
                Some(entry) if entry.key == key => {
                    entry.value = value.to_owned();
                    return;
                }
                Some(entry) => cur = &mut entry.next,
                None => {
                    *cur = Some(Box::new(Entry::new(key, value)));
                    return;
                }
            }
        }
    }

    /// Removes the entry for `key`, relinking its predecessor (or the bucket
    /// head) around it. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) {
        let index = hash(key, self.capacity);
        let mut cur = &mut self.buckets[index];
        loop {
            if cur.as_ref().map_or(false, |entry| entry.key == key) {
                let entry = cur.take().expect("matched entry is present");
                *cur = entry.next;
                return;
            }
            match cur {
                None => return,
                Some(entry) => cur = &mut entry.next,
            }
        }
    }

    /// Looks up `key`, returning `None` if no entry for it exists.
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        let index = hash(key, self.capacity);
        let mut cur = self.buckets[index].as_deref();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(&entry.value);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    /// Consumes the table and returns one with double the bucket count,
    /// holding exactly the same associations. Every entry is re-inserted, so
    /// keys are rehashed against the new capacity; the old table's storage
    /// is released as the walk advances.
    pub fn resize(mut self) -> HashTable {
        let capacity = self.capacity * 2;
        let mut resized = HashTable {
            capacity,
            buckets: (0..capacity).map(|_| None).collect(),
        };
        for bucket in self.buckets.iter_mut() {
            let mut cur = bucket.take();
            while let Some(mut entry) = cur {
                resized.insert(&entry.key, &entry.value);
                cur = entry.next.take();
            }
        }
        resized
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        // Unlink each node's successor before the node itself is released,
        // so teardown is iterative rather than one recursive Box drop per
        // chain link.
        for bucket in self.buckets.iter_mut() {
            let mut cur = bucket.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
            }
        }
    }
}

#[cfg(test)]
impl HashTable {
    /// Counts entries holding `key`, across every chain in every bucket.
    fn occurrences(&self, key: &str) -> usize {
        let mut count = 0;
        for bucket in &self.buckets {
            let mut cur = bucket.as_deref();
            while let Some(entry) = cur {
                if entry.key == key {
                    count += 1;
                }
                cur = entry.next.as_deref();
            }
        }
        count
    }
}
