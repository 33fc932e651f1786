//! In-memory element tree
//!
//! A slotmap arena of elements with DOM-like move semantics: inserting an
//! element that already has a parent detaches it first. Removed elements stay
//! in the arena (detached), just as DOM nodes survive while referenced.

use indexmap::IndexMap;
use pageslide_platform::{PlatformError, Result};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to an element in a [`NodeTree`]
    pub struct NodeId;
}

/// A single element
#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Tag name
    pub tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: SmallVec<[String; 2]>,
    /// Inline styles in insertion order
    styles: IndexMap<String, String>,
    attributes: FxHashMap<String, String>,
}

impl Node {
    /// Parent element, if attached
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child elements in order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Class list in insertion order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Inline styles in insertion order
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Arena of elements
#[derive(Clone, Debug, Default)]
pub struct NodeTree {
    nodes: SlotMap<NodeId, Node>,
}

impl NodeTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element
    pub fn create(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Node {
            tag: tag.to_string(),
            ..Default::default()
        })
    }

    /// Look up an element
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| PlatformError::TreeMutation(format!("unknown element {:?}", id)))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| PlatformError::TreeMutation(format!("unknown element {:?}", id)))
    }

    /// Parent of `id`
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of `id` (empty for unknown ids)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Insert `node` into `parent` before `reference` (append when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.node(parent)?;
        self.node(node)?;
        if reference == Some(node) {
            return Ok(());
        }
        if self.is_inclusive_ancestor(node, parent) {
            return Err(PlatformError::TreeMutation(
                "cannot insert an element into itself or its descendant".into(),
            ));
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(PlatformError::TreeMutation(
                    "reference element is not a child of the parent".into(),
                ));
            }
        }

        self.detach(node);

        let siblings = &self.node(parent)?.children;
        let index = match reference {
            Some(reference) => siblings
                .iter()
                .position(|child| *child == reference)
                .unwrap_or(siblings.len()),
            None => siblings.len(),
        };
        self.node_mut(parent)?.children.insert(index, node);
        self.node_mut(node)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.parent(child) != Some(parent) {
            return Err(PlatformError::TreeMutation(
                "element is not a child of the given parent".into(),
            ));
        }
        self.detach(child);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|child| *child != id);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }
    }

    /// Descendants of `root` carrying `class`, in document order
    pub fn descendants_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        found
    }

    /// Inline style value
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.styles.get(property))
            .map(String::as_str)
    }

    /// Set or remove an inline style
    pub fn set_style(&mut self, id: NodeId, property: &str, value: Option<&str>) -> Result<()> {
        let node = self.node_mut(id)?;
        match value {
            Some(value) if !value.is_empty() => {
                node.styles.insert(property.to_string(), value.to_string());
            }
            _ => {
                node.styles.shift_remove(property);
            }
        }
        Ok(())
    }

    /// Add a class (idempotent)
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let node = self.node_mut(id)?;
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    /// Whether the element carries `class`
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.node_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Attribute value
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_moves_node() {
        let mut tree = NodeTree::new();
        let a = tree.create("div");
        let b = tree.create("div");
        let child = tree.create("span");

        tree.insert_before(a, child, None).unwrap();
        tree.insert_before(b, child, None).unwrap();

        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[child]);
        assert_eq!(tree.parent(child), Some(b));
    }

    #[test]
    fn test_insert_before_reference() {
        let mut tree = NodeTree::new();
        let root = tree.create("div");
        let first = tree.create("p");
        let last = tree.create("p");
        let middle = tree.create("p");
        tree.insert_before(root, first, None).unwrap();
        tree.insert_before(root, last, None).unwrap();
        tree.insert_before(root, middle, Some(last)).unwrap();

        assert_eq!(tree.children(root), &[first, middle, last]);

        // Moving a sibling in front of its neighbour.
        tree.insert_before(root, last, Some(first)).unwrap();
        assert_eq!(tree.children(root), &[last, first, middle]);
    }

    #[test]
    fn test_insert_rejects_cycles_and_foreign_reference() {
        let mut tree = NodeTree::new();
        let outer = tree.create("div");
        let inner = tree.create("div");
        let stranger = tree.create("div");
        tree.insert_before(outer, inner, None).unwrap();

        assert!(tree.insert_before(inner, outer, None).is_err());
        assert!(tree.insert_before(outer, outer, None).is_err());
        assert!(tree.insert_before(outer, stranger, Some(stranger)).is_ok());
        let loose = tree.create("div");
        assert!(tree.insert_before(inner, loose, Some(outer)).is_err());
    }

    #[test]
    fn test_remove_child() {
        let mut tree = NodeTree::new();
        let root = tree.create("div");
        let child = tree.create("div");
        tree.insert_before(root, child, None).unwrap();

        assert!(tree.remove_child(child, root).is_err());
        tree.remove_child(root, child).unwrap();
        assert_eq!(tree.parent(child), None);
        assert!(tree.get(child).is_some());
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut tree = NodeTree::new();
        let root = tree.create("div");
        let a = tree.create("section");
        let nested = tree.create("div");
        let b = tree.create("section");
        let c = tree.create("section");
        tree.insert_before(root, a, None).unwrap();
        tree.insert_before(root, nested, None).unwrap();
        tree.insert_before(nested, b, None).unwrap();
        tree.insert_before(root, c, None).unwrap();
        for id in [a, b, c, root] {
            tree.add_class(id, "slide").unwrap();
        }

        assert_eq!(tree.descendants_with_class(root, "slide"), vec![a, b, c]);
    }

    #[test]
    fn test_styles_and_attributes() {
        let mut tree = NodeTree::new();
        let id = tree.create("div");
        tree.set_style(id, "width", Some("10px")).unwrap();
        tree.set_style(id, "height", Some("20px")).unwrap();
        tree.set_style(id, "width", Some("30px")).unwrap();
        let styles: Vec<_> = tree.get(id).unwrap().styles().collect();
        assert_eq!(styles, vec![("width", "30px"), ("height", "20px")]);

        tree.set_style(id, "width", None).unwrap();
        tree.set_style(id, "height", Some("")).unwrap();
        assert_eq!(tree.style(id, "width"), None);
        assert_eq!(tree.style(id, "height"), None);

        tree.set_attribute(id, "data-color", "#ff0").unwrap();
        assert_eq!(tree.attribute(id, "data-color"), Some("#ff0"));
        tree.add_class(id, "x").unwrap();
        tree.add_class(id, "x").unwrap();
        assert_eq!(tree.get(id).unwrap().classes().count(), 1);
    }
}
