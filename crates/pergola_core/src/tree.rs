//! Element tree storage
//!
//! Elements created during a render pass live in a slotmap arena with
//! parent→children edges. The arena is pass-local: it is rebuilt from
//! scratch on every pass and serialized to the nested wire form at the end.

use serde_json::Value;
use slotmap::{new_key_type, SlotMap};

use crate::Element;

new_key_type! {
    /// Arena handle for one element in the current render pass.
    pub struct ElementId;
}

/// One stored element together with its child edges.
#[derive(Clone, Debug)]
pub struct ElementNode {
    pub element: Element,
    pub children: Vec<ElementId>,
}

/// Arena of all elements created during one render pass.
#[derive(Default)]
pub struct ElementTree {
    nodes: SlotMap<ElementId, ElementNode>,
    root: Option<ElementId>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element as the last child of `parent`, or as the tree root
    /// when `parent` is `None`.
    pub fn insert(&mut self, element: Element, parent: Option<ElementId>) -> ElementId {
        let id = self.nodes.insert(ElementNode {
            element,
            children: Vec::new(),
        });
        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                    parent_node.children.push(id);
                }
            }
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }
        id
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Keys of the direct children of `id`, in creation order.
    pub fn child_keys(&self, id: ElementId) -> Vec<&str> {
        self.children(id)
            .iter()
            .filter_map(|&child| self.nodes.get(child))
            .map(|n| n.element.key.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize the subtree rooted at `id` to the nested wire form:
    /// `{name, key, props, virtual, children}`.
    pub fn to_value(&self, id: ElementId) -> Value {
        let Some(node) = self.nodes.get(id) else {
            return Value::Null;
        };
        let mut object = serde_json::Map::with_capacity(5);
        object.insert("name".into(), node.element.name.clone().into());
        object.insert("key".into(), node.element.key.clone().into());
        object.insert("props".into(), node.element.props.clone().into());
        object.insert("virtual".into(), node.element.is_virtual.into());
        object.insert(
            "children".into(),
            Value::Array(node.children.iter().map(|&c| self.to_value(c)).collect()),
        );
        Value::Object(object)
    }
}
