//! Widget tree: hierarchy, layout rects and hit-testing.

use super::{WidgetId, WidgetState};
use crate::layout::Rect;
use std::collections::HashMap;

/// Manages the widget hierarchy.
pub struct WidgetTree {
    /// Widget states indexed by ID.
    widgets: HashMap<WidgetId, WidgetState>,
    /// Root widget IDs.
    roots: Vec<WidgetId>,
    /// Parent-child relationships.
    children: HashMap<WidgetId, Vec<WidgetId>>,
    /// ID counter for generating unique IDs.
    next_id: u64,
}

impl WidgetTree {
    /// Creates a new empty widget tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widgets: HashMap::with_capacity(32),
            roots: Vec::with_capacity(1),
            children: HashMap::with_capacity(32),
            next_id: 1,
        }
    }

    /// Generates a new unique widget ID.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a root widget.
    pub fn add_root(&mut self, state: WidgetState) {
        let id = state.id;
        self.widgets.insert(id, state);
        self.roots.push(id);
        self.children.insert(id, Vec::new());
    }

    /// Adds a child widget to a parent.
    pub fn add_child(&mut self, parent: WidgetId, state: WidgetState) {
        let id = state.id;
        let mut state = state;
        state.parent = Some(parent);

        self.widgets.insert(id, state);
        self.children.entry(parent).or_default().push(id);
        self.children.insert(id, Vec::new());
    }

    /// Gets a widget state by ID.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(&id)
    }

    /// Gets mutable access to a widget state.
    #[must_use]
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        self.widgets.get_mut(&id)
    }

    /// Returns the children of a widget.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns all root widgets.
    #[must_use]
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    /// Updates the layout rect of a widget. Unknown IDs are ignored.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.rect = rect;
        }
    }

    /// Sets or clears a flag on a widget and all of its descendants.
    pub fn assign_flag_recursive(&mut self, id: WidgetId, flag: u32, on: bool) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(state) = self.widgets.get_mut(&current) {
                state.flags.assign(flag, on);
            }
            stack.extend(self.children(current).iter().copied());
        }
    }

    /// Returns the topmost widget under the point, if any.
    ///
    /// A widget is only hittable when it and every ancestor is visible and
    /// enabled.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<WidgetId> {
        self.iter_reverse().find(|&id| {
            self.get(id).is_some_and(|state| state.hit(x, y)) && self.ancestors_enabled(id)
        })
    }

    /// Number of widgets in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns true if the tree holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn ancestors_enabled(&self, id: WidgetId) -> bool {
        let mut parent = self.get(id).and_then(|s| s.parent);
        while let Some(p) = parent {
            match self.get(p) {
                Some(state) if state.is_visible() && state.is_enabled() => parent = state.parent,
                _ => return false,
            }
        }
        true
    }

    /// Returns all widget IDs in depth-first order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = WidgetId> + '_ {
        WidgetDfsIterator {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Returns all widget IDs in reverse depth-first order (for hit testing).
    pub fn iter_reverse(&self) -> impl Iterator<Item = WidgetId> + '_ {
        // Collect all in DFS order then reverse
        let all: Vec<_> = self.iter_dfs().collect();
        all.into_iter().rev()
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over widget tree.
struct WidgetDfsIterator<'a> {
    tree: &'a WidgetTree,
    stack: Vec<WidgetId>,
}

impl Iterator for WidgetDfsIterator<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Push children in reverse order so they're processed left-to-right
        if let Some(children) = self.tree.children.get(&id) {
            for &child in children.iter().rev() {
                self.stack.push(child);
            }
        }

        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetFlags;

    #[test]
    fn test_tree_hierarchy() {
        let mut tree = WidgetTree::new();

        let root_id = tree.next_id();
        tree.add_root(WidgetState::new(root_id));

        let child1_id = tree.next_id();
        tree.add_child(root_id, WidgetState::new(child1_id));

        let child2_id = tree.next_id();
        tree.add_child(root_id, WidgetState::new(child2_id));

        assert_eq!(tree.children(root_id).len(), 2);
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut tree = WidgetTree::new();
        let root = tree.next_id();
        tree.add_root(WidgetState::new(root));
        let child = tree.next_id();
        tree.add_child(root, WidgetState::new(child));

        tree.set_rect(root, Rect::new(0.0, 0.0, 100.0, 100.0));
        tree.set_rect(child, Rect::new(10.0, 10.0, 20.0, 20.0));

        assert_eq!(tree.hit_test(15.0, 15.0), Some(child));
        assert_eq!(tree.hit_test(50.0, 50.0), Some(root));
        assert_eq!(tree.hit_test(150.0, 50.0), None);
    }

    #[test]
    fn test_disabled_ancestor_blocks_hits() {
        let mut tree = WidgetTree::new();
        let root = tree.next_id();
        tree.add_root(WidgetState::new(root));
        let child = tree.next_id();
        tree.add_child(root, WidgetState::new(child));
        tree.set_rect(root, Rect::new(0.0, 0.0, 100.0, 100.0));
        tree.set_rect(child, Rect::new(10.0, 10.0, 20.0, 20.0));

        if let Some(state) = tree.get_mut(root) {
            state.flags.clear(WidgetFlags::ENABLED);
        }
        assert_eq!(tree.hit_test(15.0, 15.0), None);

        tree.assign_flag_recursive(root, WidgetFlags::ENABLED, true);
        assert_eq!(tree.hit_test(15.0, 15.0), Some(child));
    }
}
