//! Separately chained hash map keyed by instance id.
//!
//! Inserting never replaces: a second insert under the same id pushes a new
//! node in front of the old one, so lookups see the newest entry and a
//! remove uncovers the previous one.

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 100;
const LOAD_FACTOR_THRESHOLD: f64 = 1.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No entry for id '{0}'")]
    NotFound(String),
}

/// PJW/ELF string hash
pub fn hash_id(id: &str, capacity: usize) -> usize {
    let mut hash: u32 = 0;
    for byte in id.bytes() {
        hash = (hash << 4).wrapping_add(u32::from(byte));
        let high = hash & 0xF000_0000;
        if high != 0 {
            hash ^= high >> 24;
            hash &= !high;
        }
    }
    hash as usize % capacity
}

struct Node<V> {
    id: String,
    value: V,
    next: Option<Box<Node<V>>>,
}

pub struct InstanceRegistry<V> {
    buckets: Vec<Option<Box<Node<V>>>>,
    size: usize,
}

impl<V> Default for InstanceRegistry<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> InstanceRegistry<V> {
    /// A zero capacity is raised to one bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buckets: Self::empty_buckets(capacity),
            size: 0,
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Option<Box<Node<V>>>> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }

    /// Push a new entry at the head of its chain, doubling the bucket count
    /// once the load factor passes the threshold.
    pub fn insert(&mut self, id: impl Into<String>, value: V) {
        let id = id.into();
        let bucket = hash_id(&id, self.capacity());
        let next = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(Node { id, value, next }));
        self.size += 1;

        if self.size as f64 / self.capacity() as f64 > LOAD_FACTOR_THRESHOLD {
            self.resize(self.capacity() * 2);
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug!(
            "resizing instance registry from {} to {} buckets",
            self.capacity(),
            capacity
        );
        let old = std::mem::replace(&mut self.buckets, Self::empty_buckets(capacity));
        for mut chain in old {
            while let Some(mut node) = chain {
                chain = node.next.take();
                let bucket = hash_id(&node.id, capacity);
                node.next = self.buckets[bucket].take();
                self.buckets[bucket] = Some(node);
            }
        }
    }

    /// Newest entry stored under `id`
    pub fn lookup(&self, id: &str) -> Result<&V, RegistryError> {
        let mut cursor = self.buckets[hash_id(id, self.capacity())].as_deref();
        while let Some(node) = cursor {
            if node.id == id {
                return Ok(&node.value);
            }
            cursor = node.next.as_deref();
        }
        Err(RegistryError::NotFound(id.to_string()))
    }

    pub fn lookup_mut(&mut self, id: &str) -> Result<&mut V, RegistryError> {
        let bucket = hash_id(id, self.capacity());
        let mut cursor = self.buckets[bucket].as_deref_mut();
        while let Some(node) = cursor {
            if node.id == id {
                return Ok(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        Err(RegistryError::NotFound(id.to_string()))
    }

    /// Unlink the first node matching `id` along its chain.
    pub fn remove(&mut self, id: &str) -> Result<V, RegistryError> {
        let bucket = hash_id(id, self.capacity());
        let mut chain = self.buckets[bucket].take();
        let mut kept = Vec::new();
        let mut removed = None;
        while let Some(mut node) = chain {
            chain = node.next.take();
            if removed.is_none() && node.id == id {
                removed = Some(node.value);
            } else {
                kept.push(node);
            }
        }

        // Relink the survivors in their previous order
        let mut head = None;
        for mut node in kept.into_iter().rev() {
            node.next = head;
            head = Some(node);
        }
        self.buckets[bucket] = head;

        let value = removed.ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        self.size -= 1;
        Ok(value)
    }

    /// Every stored id, newest first within a chain
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(self.size);
        for chain in &self.buckets {
            let mut cursor = chain.as_deref();
            while let Some(node) = cursor {
                ids.push(node.id.as_str());
                cursor = node.next.as_deref();
            }
        }
        ids
    }

    /// Drop every entry, keeping the current bucket count
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            // Unlink iteratively so long chains don't recurse on drop
            let mut cursor = chain.take();
            while let Some(mut node) = cursor {
                cursor = node.next.take();
            }
        }
        self.size = 0;
    }
}

impl<V> Drop for InstanceRegistry<V> {
    fn drop(&mut self) {
        self.clear();
    }
}
