//! Combinators for composing nodes: groups, fragments, conditionals and
//! fallbacks.
use std::{
    borrow::Borrow,
    collections::HashMap,
    hash::{BuildHasher, Hash},
    io,
    panic::AssertUnwindSafe,
    sync::Arc,
};

use crate::node::{Node, Render};

/// Splice `nodes` into whatever element they end up in.
///
/// A group is equivalent to writing its children in its place, nested groups
/// included. Attribute children inside a group still land in the opening tag.
///
/// A group cannot be rendered on its own, see [`fragment`] for that.
pub fn group(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Group(nodes.into_iter().collect::<Vec<_>>().into())
}

/// A sequence of nodes rendered one after the other.
#[derive(Clone, Debug)]
pub struct Fragment(pub Arc<[Node]>);

fn render_flat(nodes: &[Node], w: &mut dyn io::Write) -> io::Result<()> {
    for node in nodes.iter() {
        match node {
            Node::Group(children) => render_flat(children, w)?,
            node => node.render(w)?,
        }
    }
    Ok(())
}

impl Render for Fragment {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        render_flat(&self.0, w)
    }
}

/// Render `nodes` in order, without a wrapping element.
///
/// Unlike a [`group`] a fragment may be rendered directly, which makes it
/// the way to produce several top-level siblings.
pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::new(Fragment(nodes.into_iter().collect::<Vec<_>>().into()))
}

/// `node` if `condition` holds, otherwise [`Node::Empty`].
pub fn if_then(condition: bool, node: Node) -> Node {
    if condition { node } else { Node::Empty }
}

/// `node` if `condition` holds, otherwise `else_node`.
pub fn if_else(condition: bool, node: Node, else_node: Node) -> Node {
    if condition { node } else { else_node }
}

/// Builds its node at render time.
pub struct ErrorBoundary<F>(F);

impl<F: Fn() -> Node> Render for ErrorBoundary<F> {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        (self.0)().render(w)
    }
}

/// Defer building a node until it is rendered.
pub fn error_boundary<F>(f: F) -> Node
where
    F: Fn() -> Node + Send + Sync + 'static,
{
    Node::new(ErrorBoundary(f))
}

/// Renders a replacement when its node fails.
pub struct Fallback<F> {
    node: Node,
    fallback: F,
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl<F: Fn(Option<&anyhow::Error>) -> Node> Render for Fallback<F> {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        if self.node.is_empty() {
            return (self.fallback)(None).render(w);
        }

        // Buffer so a half-rendered node never reaches the sink.
        let mut buffer = Vec::new();
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| self.node.render(&mut buffer)));
        let error = match result {
            Ok(Ok(())) => return w.write_all(&buffer),
            Ok(Err(e)) => anyhow::Error::from(e),
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                log::warn!("recovered from a panic while rendering: {msg}");
                anyhow::anyhow!("render panicked: {msg}")
            }
        };
        log::trace!("rendering fallback after: {error}");
        (self.fallback)(Some(&error)).render(w)
    }
}

/// Render `node`, or the node built by `f` if rendering `node` fails.
///
/// `f` receives the error, which is either the sink error or the message of
/// a recovered panic. If `node` is [`Node::Empty`], `f(None)` is rendered
/// instead.
pub fn fallback<F>(node: Node, f: F) -> Node
where
    F: Fn(Option<&anyhow::Error>) -> Node + Send + Sync + 'static,
{
    Node::new(Fallback { node, fallback: f })
}

/// `f(key, value)` if `key` is in `map`, otherwise [`Node::Empty`].
pub fn key_exists<K, V, S, Q>(
    map: &HashMap<K, V, S>,
    key: &Q,
    f: impl FnOnce(&K, &V) -> Node,
) -> Node
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    match map.get_key_value(key) {
        Some((k, v)) => f(k, v),
        None => Node::Empty,
    }
}
