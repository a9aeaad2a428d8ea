//! The binary search tree node record.

use crate::domain::arena::NodeId;
use crate::domain::error::NodeResult;
use crate::domain::policy::CountPolicy;

/// A single binary search tree node: one value, two child links, and an
/// occurrence counter.
///
/// The node is a passive record. It enforces no ordering, uniqueness, or
/// acyclicity; those belong to whatever tree assembles the nodes.
///
/// Child links are [`NodeId`] handles and do not own the child. The child's
/// allocation lives in a [`NodeArena`](crate::domain::NodeArena), so dropping
/// a node releases its own fields only, never the subtree behind its links.
///
/// A `Node<T>` is `Send`/`Sync` whenever `T` is. It has no internal locking:
/// mutating one node from several threads needs an external lock around the
/// node or its arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    count: u32,
}

impl<T> Node<T> {
    /// Creates a node holding `value`, with no children and a count of 0.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            count: 0,
        }
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Points the left link at `link`.
    ///
    /// Whatever the slot referenced before is not released; it stays owned by
    /// its arena.
    pub fn set_left(&mut self, link: Option<NodeId>) {
        self.left = link;
    }

    /// Points the right link at `link`.
    ///
    /// Whatever the slot referenced before is not released; it stays owned by
    /// its arena.
    pub fn set_right(&mut self, link: Option<NodeId>) {
        self.right = link;
    }

    /// Adds one to the count, wrapping at `u32::MAX`.
    pub fn increment_count(&mut self) {
        self.count = self.count.wrapping_add(1);
    }

    /// Subtracts one from the count, wrapping to `u32::MAX` below zero.
    pub fn decrement_count(&mut self) {
        self.count = self.count.wrapping_sub(1);
    }

    /// Adds one to the count under `policy` and returns the new count.
    ///
    /// On error the count is left unchanged.
    pub fn increment_count_with(&mut self, policy: CountPolicy) -> NodeResult<u32> {
        self.count = policy.increment(self.count)?;
        Ok(self.count)
    }

    /// Subtracts one from the count under `policy` and returns the new count.
    ///
    /// On error the count is left unchanged.
    pub fn decrement_count_with(&mut self, policy: CountPolicy) -> NodeResult<u32> {
        self.count = policy.decrement(self.count)?;
        Ok(self.count)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable handle to the stored value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The left link slot itself, for reassigning or taking the child.
    pub fn left_mut(&mut self) -> &mut Option<NodeId> {
        &mut self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The right link slot itself, for reassigning or taking the child.
    pub fn right_mut(&mut self) -> &mut Option<NodeId> {
        &mut self.right
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: Clone> Node<T> {
    /// Detached copy of the stored value.
    pub fn value_copy(&self) -> T {
        self.value.clone()
    }
}
