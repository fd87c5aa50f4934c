//! The node contract.
//!
//! Anything that can write itself into an [`io::Write`] sink is a node. A
//! node may also declare whether it belongs inside an opening tag (an
//! attribute) or between the tags (content). That declaration is what lets a
//! single flat list of children carry both.
use std::{io, sync::Arc};

/// Where a node lands when it is the child of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// Nested content, rendered between the opening and closing tags.
    #[default]
    Element,
    /// Rendered inside the opening tag.
    Attribute,
}

/// Something that renders into a byte sink.
///
/// Implementations must not write after their own failure. Errors from the
/// sink are returned as-is.
pub trait Render {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()>;

    /// The role this renderable plays inside an element's children.
    fn kind(&self) -> NodeKind {
        NodeKind::Element
    }
}

/// A renderable node.
///
/// Cloning is cheap, every variant is reference counted or empty.
#[derive(Clone, Default)]
pub enum Node {
    /// Renders nothing. Elements skip it entirely.
    #[default]
    Empty,
    /// A transparent splice of nodes. Only an element may expand it.
    Group(Arc<[Node]>),
    /// Any other renderable.
    Dyn(Arc<dyn Render + Send + Sync>),
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Empty => f.write_str("Node::Empty"),
            Node::Group(nodes) => f.debug_tuple("Node::Group").field(&nodes.len()).finish(),
            Node::Dyn(_) => f.write_str("Node::Dyn(..)"),
        }
    }
}

impl Node {
    /// Wrap a renderable.
    pub fn new(render: impl Render + Send + Sync + 'static) -> Self {
        Node::Dyn(Arc::new(render))
    }

    /// Wrap a render function as a content node.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut dyn io::Write) -> io::Result<()> + Send + Sync + 'static,
    {
        Node::new(NodeFn(f))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Dyn(render) => render.kind(),
            Node::Empty | Node::Group(_) => NodeKind::Element,
        }
    }

    /// Render into `w`.
    ///
    /// ## Panics
    /// Panics if this node is a [`Node::Group`]. Groups only make sense as the
    /// child of an element, which splices them in place.
    pub fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        match self {
            Node::Empty => Ok(()),
            Node::Group(_) => panic!("cannot render a group directly"),
            Node::Dyn(render) => render.render(w),
        }
    }

    /// Render into memory and return the markup.
    pub fn html_string(&self) -> String {
        let mut buffer = Vec::new();
        let _ = self.render(&mut buffer);
        match String::from_utf8(buffer) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.html_string())
    }
}

impl<T: Render + Send + Sync + 'static> From<T> for Node {
    fn from(render: T) -> Self {
        Node::new(render)
    }
}

impl From<Option<Node>> for Node {
    fn from(may_node: Option<Node>) -> Self {
        may_node.unwrap_or_default()
    }
}

/// A render function posing as a content node.
pub struct NodeFn<F>(pub F);

impl<F> Render for NodeFn<F>
where
    F: Fn(&mut dyn io::Write) -> io::Result<()>,
{
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        (self.0)(w)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn node_is_sendable() {
        fn sendable<T: Send + Sync + 'static>() {}
        sendable::<Node>()
    }

    #[test]
    fn node_fn_renders_and_displays() {
        let node = Node::from_fn(|w| w.write_all(b"hello"));
        assert_eq!(NodeKind::Element, node.kind());
        assert_eq!("hello", node.html_string());
        assert_eq!("hello", format!("{node}"));
    }

    #[test]
    fn empty_renders_nothing() {
        let node: Node = None.into();
        assert!(node.is_empty());
        assert_eq!("", node.html_string());
    }

    #[test]
    #[should_panic(expected = "cannot render a group directly")]
    fn bare_group_panics() {
        let group = Node::Group(Arc::from(vec![Node::Empty]));
        let _ = group.render(&mut Vec::new());
    }
}
