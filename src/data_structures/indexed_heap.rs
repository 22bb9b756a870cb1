use std::fmt::Debug;

use crate::{Error, Result};

/// Array-backed binary min-heap over dense node ids with O(log n) decrease-key.
///
/// `entries[..size]` is the live heap. `position[id]` records where `id`
/// currently sits in `entries`, and `entries[position[id]].0 == id` holds for
/// every id ever inserted. Extraction swaps the minimum just past the live
/// region instead of dropping it, so an extracted id keeps a stale position
/// `>= size` and `contains` reports it as gone.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// `(node id, key)` pairs; the first `size` satisfy the min-heap property
    entries: Vec<(usize, K)>,

    /// Node id -> slot in `entries`, `None` for ids never inserted
    position: Vec<Option<usize>>,

    /// Logical heap size
    size: usize,
}

impl<K> IndexedMinHeap<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            position: Vec::new(),
            size: 0,
        }
    }

    /// Creates an empty heap sized for ids in `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            size: 0,
        }
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no entries remain
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true iff `node` was inserted and has not been extracted since
    pub fn contains(&self, node: usize) -> bool {
        matches!(self.slot_of(node), Some(slot) if slot < self.size)
    }

    /// Returns the current key of a live node
    pub fn key(&self, node: usize) -> Option<K> {
        match self.slot_of(node) {
            Some(slot) if slot < self.size => Some(self.entries[slot].1),
            _ => None,
        }
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(usize, K)> {
        if self.is_empty() {
            None
        } else {
            Some(self.entries[0])
        }
    }

    /// Inserts a node with the given key and sifts it up.
    ///
    /// Inserting a node that is already live is a caller error. A node that
    /// was extracted earlier may be inserted again.
    pub fn insert(&mut self, node: usize, key: K) {
        debug_assert!(!self.contains(node), "node {} is already in the heap", node);
        if node >= self.position.len() {
            self.position.resize(node + 1, None);
        }

        let slot = self.size;
        let previous = self.position[node];
        match previous {
            // Extracted earlier: its entry lives past the live region, pull it back to the boundary
            Some(stale) => {
                self.swap(stale, slot);
                self.entries[slot].1 = key;
            }
            None => {
                if slot < self.entries.len() {
                    // Boundary slot holds an extracted entry; move it to the end
                    let displaced = self.entries[slot];
                    self.entries.push(displaced);
                    self.position[displaced.0] = Some(self.entries.len() - 1);
                    self.entries[slot] = (node, key);
                } else {
                    self.entries.push((node, key));
                }
                self.position[node] = Some(slot);
            }
        }

        self.size += 1;
        self.sift_up(slot);
    }

    /// Removes and returns the node with the minimum key.
    ///
    /// The last live entry moves into the root and is sifted down; on equal
    /// keys the parent stays and the left child wins over the right.
    pub fn extract_min(&mut self) -> Result<(usize, K)> {
        if self.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let min = self.entries[0];
        let last = self.size - 1;
        self.swap(0, last);
        self.size -= 1;
        self.heapify(0);

        Ok(min)
    }

    /// Lowers the key of a live node and sifts it up from its current slot.
    ///
    /// `new_key` must be strictly smaller than the current key; violating this
    /// is a caller error that leaves the heap order unspecified.
    pub fn decrease_key(&mut self, node: usize, new_key: K) -> Result<()> {
        let slot = match self.slot_of(node) {
            Some(slot) if slot < self.size => slot,
            _ => return Err(Error::InvalidVertex(node)),
        };
        debug_assert!(
            new_key < self.entries[slot].1,
            "decrease_key on node {} with {:?} not below current key {:?}",
            node,
            new_key,
            self.entries[slot].1
        );

        self.entries[slot].1 = new_key;
        self.sift_up(slot);
        Ok(())
    }

    /// Checks heap order over the live region and the position map over every entry
    pub fn check_invariants(&self) -> bool {
        let ordered = (1..self.size).all(|i| !(self.entries[i].1 < self.entries[(i - 1) / 2].1));
        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(slot, &(node, _))| self.slot_of(node) == Some(slot));
        ordered && indexed
    }

    fn slot_of(&self, node: usize) -> Option<usize> {
        self.position.get(node).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.position[self.entries[a].0] = Some(a);
        self.position[self.entries[b].0] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].1 < self.entries[parent].1 {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn heapify(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.size && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < self.size && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<K> Default for IndexedMinHeap<K>
where
    K: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
