//! Compact arena allocator backing the tree's node storage.
//!
//! Nodes are addressed by `NodeId` instead of owning pointers, so operations
//! that mutate a parent and a child together (split, merge, borrow) work on
//! plain indices and never hold two live references into the structure.
//! Freed slots are kept on a free list and reused by later allocations.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Node ID type for arena-based allocation.
pub type NodeId = u32;

/// Sentinel ID that never refers to an allocated slot.
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for an arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_slots: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator with free-list slot reuse.
#[derive(Debug)]
pub struct Arena<T> {
    storage: Vec<T>,
    /// Free slot indices available for reuse.
    free_list: Vec<usize>,
    /// Tracks which slots are currently allocated.
    allocated_mask: Vec<bool>,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated_mask: Vec::new(),
        }
    }

    /// Allocate a new item in the arena and return its ID.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            index
        };

        NodeId::try_from(index).expect("arena index exceeds NodeId range")
    }

    /// Deallocate an item and return it, or `None` if the ID is not allocated.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T>
    where
        T: Default,
    {
        let index = usize::try_from(id).ok()?;
        if !self.allocated_mask.get(index).copied().unwrap_or(false) {
            return None;
        }

        self.allocated_mask[index] = false;
        self.free_list.push(index);
        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Get a reference to an item in the arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(&self.storage[index])
        } else {
            None
        }
    }

    /// Get a mutable reference to an item in the arena.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(&mut self.storage[index])
        } else {
            None
        }
    }

    /// Check if an ID is valid and allocated.
    pub fn contains(&self, id: NodeId) -> bool {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.allocated_mask.get(index).copied())
            .unwrap_or(false)
    }

    /// Get the number of allocated items.
    pub fn allocated_count(&self) -> usize {
        self.allocated_mask.iter().filter(|&&a| a).count()
    }

    /// Get the number of free slots awaiting reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Check if the arena holds no allocated items.
    pub fn is_empty(&self) -> bool {
        self.allocated_count() == 0
    }

    /// Clear all items from the arena.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
    }

    /// Get arena statistics.
    pub fn stats(&self) -> ArenaStats {
        let total_slots = self.storage.len();
        let allocated_count = self.allocated_count();
        let utilization = if total_slots > 0 {
            allocated_count as f64 / total_slots as f64
        } else {
            0.0
        };

        ArenaStats {
            total_slots,
            allocated_count,
            free_count: self.free_list.len(),
            utilization,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Indexing panics on stale IDs. Tree code only derives IDs from the live
// structure, so a panic here means the tree itself is corrupted.
impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.storage[id as usize]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.storage[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic_operations() {
        let mut arena = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena.get(id3), Some(&126));
        assert_eq!(arena[id2], 84);

        assert!(arena.contains(id1));
        assert!(!arena.contains(NULL_NODE));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_arena_slot_reuse() {
        let mut arena: Arena<i32> = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        assert_eq!(arena.deallocate(id1), Some(42));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));
        assert_eq!(arena.free_count(), 1);

        // Freed slot is handed back out.
        let id3 = arena.allocate(168);
        assert_eq!(id3, id1);
        assert_eq!(arena.get(id3), Some(&168));
        assert_eq!(arena.free_count(), 0);
        assert_eq!(arena.allocated_count(), 2);
    }

    #[test]
    fn test_arena_double_deallocate_is_none() {
        let mut arena: Arena<i32> = Arena::new();
        let id = arena.allocate(7);
        assert_eq!(arena.deallocate(id), Some(7));
        assert_eq!(arena.deallocate(id), None);
    }

    #[test]
    fn test_arena_clear() {
        let mut arena: Arena<i32> = Arena::new();
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.stats().total_slots, 0);
    }
}
