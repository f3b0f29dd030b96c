//! In-memory element tree
//!
//! An arena-backed `UiTree` with no rendering. Hosts the controllers in
//! tests and in the headless demo.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::tree::{ElementId, ElementKind, PickingMode, UiTree, Vec2};

#[derive(Debug, Clone)]
struct Node {
    name: String,
    kind: ElementKind,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: BTreeSet<String>,
    translate: Vec2,
    scale: f32,
    picking: PickingMode,
    attached: bool,
}

impl Node {
    fn new(name: &str, kind: ElementKind, parent: Option<ElementId>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            parent,
            children: Vec::new(),
            classes: BTreeSet::new(),
            translate: Vec2::ZERO,
            scale: 1.0,
            picking: PickingMode::Position,
            attached: true,
        }
    }
}

/// Serializable view of one element's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub name: String,
    pub kind: ElementKind,
    pub classes: Vec<String>,
    pub translate: Vec2,
    pub scale: f32,
    pub picking: PickingMode,
}

#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: Vec<Node>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("root", ElementKind::Element, None)],
        }
    }

    pub fn add_element(&mut self, parent: ElementId, name: &str) -> ElementId {
        self.add(parent, name, ElementKind::Element)
    }

    pub fn add_button(&mut self, parent: ElementId, name: &str) -> ElementId {
        self.add(parent, name, ElementKind::Button)
    }

    /// Append a child. A detached parent yields a detached child.
    pub fn add(&mut self, parent: ElementId, name: &str, kind: ElementKind) -> ElementId {
        let id = ElementId(self.nodes.len());
        let mut node = Node::new(name, kind, Some(parent));
        match self.nodes.get_mut(parent.0) {
            Some(p) => {
                node.attached = p.attached;
                p.children.push(id);
            }
            None => node.attached = false,
        }
        self.nodes.push(node);
        id
    }

    /// Detach `id` and its subtree. Handles stay valid but stop resolving.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root() || !self.contains(id) {
            return;
        }

        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            node.attached = false;
            stack.extend(node.children.iter().copied());
        }
    }

    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.node(id).map(|n| n.kind)
    }

    pub fn classes(&self, id: ElementId) -> Vec<String> {
        self.node(id)
            .map(|n| n.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn snapshot(&self, id: ElementId) -> Option<ElementSnapshot> {
        self.node(id).map(|n| ElementSnapshot {
            id,
            name: n.name.clone(),
            kind: n.kind,
            classes: n.classes.iter().cloned().collect(),
            translate: n.translate,
            scale: n.scale,
            picking: n.picking,
        })
    }

    /// Attached node only.
    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0).filter(|n| n.attached)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).filter(|n| n.attached)
    }

    /// Depth-first, document order, including `scope` itself.
    fn walk(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if self.node(scope).is_none() {
            return out;
        }

        let mut stack = vec![scope];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
        out
    }
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl UiTree for MemoryTree {
    fn root(&self) -> ElementId {
        ElementId(0)
    }

    fn query(&self, scope: ElementId, name: &str) -> Option<ElementId> {
        self.walk(scope)
            .into_iter()
            .find(|id| self.nodes[id.0].name == name)
    }

    fn buttons(&self, scope: ElementId) -> Vec<ElementId> {
        self.walk(scope)
            .into_iter()
            .filter(|id| self.nodes[id.0].kind == ElementKind::Button)
            .collect()
    }

    fn first_child(&self, id: ElementId) -> Option<ElementId> {
        self.node(id)?.children.first().copied()
    }

    fn contains(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.remove(class);
        }
    }

    fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.classes.contains(class))
    }

    fn translate(&self, id: ElementId) -> Option<Vec2> {
        self.node(id).map(|n| n.translate)
    }

    fn set_translate(&mut self, id: ElementId, translate: Vec2) {
        if let Some(node) = self.node_mut(id) {
            node.translate = translate;
        }
    }

    fn scale(&self, id: ElementId) -> Option<f32> {
        self.node(id).map(|n| n.scale)
    }

    fn set_scale(&mut self, id: ElementId, scale: f32) {
        if let Some(node) = self.node_mut(id) {
            node.scale = scale;
        }
    }

    fn picking(&self, id: ElementId) -> Option<PickingMode> {
        self.node(id).map(|n| n.picking)
    }

    fn set_picking(&mut self, id: ElementId, mode: PickingMode) {
        if let Some(node) = self.node_mut(id) {
            node.picking = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleTarget;

    fn sample() -> (MemoryTree, ElementId, ElementId, ElementId) {
        let mut tree = MemoryTree::new();
        let root = tree.root();
        let bar = tree.add_element(root, "bar");
        let ok = tree.add_button(bar, "ok");
        let icon = tree.add_element(ok, "icon");
        tree.add_button(root, "close");
        (tree, bar, ok, icon)
    }

    #[test]
    fn test_query_scoped() {
        let (tree, bar, ok, icon) = sample();
        let root = tree.root();

        assert_eq!(tree.query(root, "ok"), Some(ok));
        assert_eq!(tree.query(bar, "icon"), Some(icon));
        assert_eq!(tree.query(bar, "close"), None);
        assert_eq!(tree.query(root, "missing"), None);
        assert_eq!(tree.query(bar, "bar"), Some(bar));
    }

    #[test]
    fn test_query_path() {
        let (tree, _, ok, icon) = sample();
        let path = vec!["bar".to_string(), "ok".to_string()];
        assert_eq!(tree.query_path(tree.root(), &path), Some(ok));
        assert_eq!(tree.first_child(ok), Some(icon));

        let broken = vec!["nope".to_string(), "ok".to_string()];
        assert_eq!(tree.query_path(tree.root(), &broken), None);
    }

    #[test]
    fn test_buttons_in_document_order() {
        let (tree, _, ok, _) = sample();
        let buttons = tree.buttons(tree.root());
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0], ok);
        assert_eq!(tree.name(buttons[1]), Some("close"));
    }

    #[test]
    fn test_class_and_style_state() {
        let (mut tree, bar, _, _) = sample();
        tree.add_class(bar, "active");
        assert!(tree.has_class(bar, "active"));
        tree.remove_class(bar, "active");
        assert!(!tree.has_class(bar, "active"));

        tree.set_translate(bar, Vec2::new(10.0, -3.0));
        tree.set_scale(bar, 0.5);
        tree.set_picking(bar, PickingMode::Ignore);

        let snap = tree.snapshot(bar).unwrap();
        assert_eq!(snap.translate, Vec2::new(10.0, -3.0));
        assert_eq!(snap.scale, 0.5);
        assert_eq!(snap.picking, PickingMode::Ignore);
    }

    #[test]
    fn test_removed_subtree_ignores_writes() {
        let (mut tree, bar, ok, icon) = sample();
        tree.remove(bar);

        assert!(!tree.contains(bar));
        assert!(!tree.contains(icon));
        assert_eq!(tree.query(tree.root(), "ok"), None);

        tree.set_scale(ok, 3.0);
        tree.add_class(ok, "active");
        assert_eq!(tree.scale(ok), None);
        assert!(!tree.has_class(ok, "active"));

        let target = StyleTarget::translate_x(icon);
        target.write(&mut tree, 5.0);
        assert_eq!(target.read(&tree), None);
    }

    #[test]
    fn test_root_cannot_be_removed() {
        let mut tree = MemoryTree::new();
        let root = tree.root();
        tree.remove(root);
        assert!(tree.contains(root));
    }

    #[test]
    fn test_style_target_keeps_other_axis() {
        let (mut tree, bar, _, _) = sample();
        tree.set_translate(bar, Vec2::new(1.0, 2.0));

        StyleTarget::translate_y(bar).write(&mut tree, -80.0);
        assert_eq!(tree.translate(bar), Some(Vec2::new(1.0, -80.0)));

        StyleTarget::translate_x(bar).write(&mut tree, 50.0);
        assert_eq!(tree.translate(bar), Some(Vec2::new(50.0, -80.0)));

        StyleTarget::scale(bar).write(&mut tree, 1.2);
        assert_eq!(StyleTarget::scale(bar).read(&tree), Some(1.2));
    }

    #[test]
    fn test_snapshot_serializes() {
        let (tree, bar, _, _) = sample();
        let json = serde_json::to_value(tree.snapshot(bar).unwrap()).unwrap();
        assert_eq!(json["name"], "bar");
        assert_eq!(json["picking"], "position");
    }
}
