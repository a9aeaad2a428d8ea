use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, warn};

use crate::domain::error::{NodeError, NodeResult};
use crate::domain::node::Node;
use crate::domain::policy::CountPolicy;

/// Non-owning handle to a node stored in a [`NodeArena`].
///
/// Handles are generational: once the node is removed, the handle stays
/// stale even if the slot is reused, so lookups through it return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Index);

impl NodeId {
    /// Slot and generation of the underlying arena index.
    pub fn into_raw_parts(self) -> (usize, u64) {
        self.0.into_raw_parts()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "node#{}@{}", slot, generation)
    }
}

/// Owner of every node allocation.
///
/// Nodes reference each other through [`NodeId`] links and never own one
/// another, so the arena is the only place nodes are released: one at a time
/// with [`remove`](Self::remove), a reachable subtree with
/// [`remove_subtree`](Self::remove_subtree), or all at once when the arena
/// drops.
///
/// No locking is done internally; share an arena across threads behind a
/// `Mutex` or `RwLock`.
#[derive(Debug)]
pub struct NodeArena<T> {
    nodes: Arena<Node<T>>,
    policy: CountPolicy,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            policy: CountPolicy::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, CountPolicy::default())
    }

    pub fn with_capacity_and_policy(capacity: usize, policy: CountPolicy) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            policy,
        }
    }

    pub fn policy(&self) -> CountPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: CountPolicy) {
        self.policy = policy;
    }

    /// Allocates a fresh node holding `value`, unlinked and with count 0.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, value: T) -> NodeId {
        NodeId(self.nodes.insert(Node::new(value)))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0)
    }

    /// Like [`get`](Self::get), failing with `StaleNode` for released handles.
    pub fn node(&self, id: NodeId) -> NodeResult<&Node<T>> {
        self.get(id).ok_or(NodeError::StaleNode(id))
    }

    /// Like [`get_mut`](Self::get_mut), failing with `StaleNode` for released handles.
    pub fn node_mut(&mut self, id: NodeId) -> NodeResult<&mut Node<T>> {
        self.get_mut(id).ok_or(NodeError::StaleNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Live nodes in slot order. This is storage order, not tree order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        self.nodes.iter().map(|(idx, node)| (NodeId(idx), node))
    }

    /// Points `parent`'s left link at `child` and returns the previous link.
    ///
    /// Both handles must be live. The previous child is not released; it is
    /// returned so the caller can remove it or relink it. No ordering or
    /// cycle checks are made.
    #[instrument(level = "trace", skip(self))]
    pub fn set_left(
        &mut self,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> NodeResult<Option<NodeId>> {
        self.ensure_live(child)?;
        let node = self.node_mut(parent)?;
        Ok(mem::replace(node.left_mut(), child))
    }

    /// Points `parent`'s right link at `child` and returns the previous link.
    ///
    /// Same contract as [`set_left`](Self::set_left).
    #[instrument(level = "trace", skip(self))]
    pub fn set_right(
        &mut self,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> NodeResult<Option<NodeId>> {
        self.ensure_live(child)?;
        let node = self.node_mut(parent)?;
        Ok(mem::replace(node.right_mut(), child))
    }

    /// Increments the node's count under the arena's policy.
    #[instrument(level = "trace", skip(self))]
    pub fn increment_count(&mut self, id: NodeId) -> NodeResult<u32> {
        let policy = self.policy;
        let node = self.node_mut(id)?;
        let before = node.count();
        let after = node.increment_count_with(policy)?;
        if after < before {
            warn!(%id, "occurrence count wrapped past u32::MAX");
        }
        Ok(after)
    }

    /// Decrements the node's count under the arena's policy.
    #[instrument(level = "trace", skip(self))]
    pub fn decrement_count(&mut self, id: NodeId) -> NodeResult<u32> {
        let policy = self.policy;
        let node = self.node_mut(id)?;
        let before = node.count();
        let after = node.decrement_count_with(policy)?;
        if after > before {
            warn!(%id, "occurrence count wrapped below zero");
        }
        Ok(after)
    }

    /// Releases a single node and hands it back.
    ///
    /// Its children stay in the arena, and links in other nodes that pointed
    /// at it become stale.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: NodeId) -> NodeResult<Node<T>> {
        self.nodes.remove(id.0).ok_or(NodeError::StaleNode(id))
    }

    /// Releases `id` and every node reachable through its links, returning
    /// their values in pre-order.
    ///
    /// Shared children and cycles are released once. Links held by nodes
    /// outside the subtree are left stale.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_subtree(&mut self, id: NodeId) -> NodeResult<Vec<T>> {
        if !self.contains(id) {
            return Err(NodeError::StaleNode(id));
        }

        let mut released = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            // already released through another link
            let Some(node) = self.nodes.remove(current.0) else {
                continue;
            };
            stack.extend(node.right());
            stack.extend(node.left());
            released.push(node.into_value());
        }

        debug!(released = released.len(), remaining = self.len(), "subtree released");
        Ok(released)
    }

    fn ensure_live(&self, link: Option<NodeId>) -> NodeResult<()> {
        match link {
            Some(id) if !self.contains(id) => Err(NodeError::StaleNode(id)),
            _ => Ok(()),
        }
    }
}
