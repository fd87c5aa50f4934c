//! Building node lists from collections.
//!
//! Everything here keeps the input order.
use std::collections::HashMap;

use crate::{Node, group};

/// Selects and transforms a list of nodes by index.
///
/// ```
/// use spriggan::{iter::range, text};
///
/// let nodes = vec![text("a"), text("b"), text("c")];
/// let even = range(nodes).filter(|i| i % 2 == 0).group();
/// assert_eq!("<p>ac</p>", spriggan::element("p", [even]).html_string());
/// ```
#[derive(Clone, Debug)]
pub struct Range {
    nodes: Vec<Node>,
}

pub fn range(nodes: impl IntoIterator<Item = Node>) -> Range {
    Range {
        nodes: nodes.into_iter().collect(),
    }
}

impl Range {
    /// Keep the nodes whose index passes `f`. Indices are positions in the
    /// current list.
    pub fn filter(self, mut f: impl FnMut(usize) -> bool) -> Self {
        let nodes = self
            .nodes
            .into_iter()
            .enumerate()
            .filter_map(|(i, node)| f(i).then_some(node))
            .collect();
        Range { nodes }
    }

    /// Replace each node with `f(index, node)`.
    pub fn map(self, mut f: impl FnMut(usize, Node) -> Node) -> Self {
        let nodes = self
            .nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| f(i, node))
            .collect();
        Range { nodes }
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Splice the nodes into their parent element.
    pub fn group(self) -> Node {
        group(self.nodes)
    }
}

/// The nodes for which `f` holds.
pub fn filter_nodes(
    nodes: impl IntoIterator<Item = Node>,
    mut f: impl FnMut(&Node) -> bool,
) -> Vec<Node> {
    nodes.into_iter().filter(|node| f(node)).collect()
}

/// One node per entry of `map`.
///
/// A `HashMap` has no order, so entries are visited sorted by key to keep
/// the output stable.
pub fn map_nodes<K: Ord, V, S>(
    map: &HashMap<K, V, S>,
    mut f: impl FnMut(&K, &V) -> Node,
) -> Vec<Node> {
    let mut entries = map.iter().collect::<Vec<_>>();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().map(|(k, v)| f(k, v)).collect()
}

/// Fold the nodes left to right with `f`. Empty input gives [`Node::Empty`].
pub fn reduce_nodes(
    nodes: impl IntoIterator<Item = Node>,
    f: impl FnMut(Node, Node) -> Node,
) -> Node {
    nodes.into_iter().reduce(f).unwrap_or_default()
}

/// One node per item, built by `f(item, index)`.
pub fn for_each<T>(
    items: impl IntoIterator<Item = T>,
    mut f: impl FnMut(T, usize) -> Node,
) -> Vec<Node> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| f(item, i))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{element, fragment, text};

    fn ul(nodes: Vec<Node>) -> String {
        element("ul", nodes).html_string()
    }

    #[test]
    fn range_filter_then_map() {
        let nodes = ["a", "b", "c", "d"].map(|s| text(s));
        let node = range(nodes)
            .filter(|i| i != 1)
            .map(|i, node| element("li", [node, text(i.to_string())]))
            .group();
        assert_eq!(
            "<ul><li>a0</li><li>c1</li><li>d2</li></ul>",
            element("ul", [node]).html_string()
        );
    }

    #[test]
    fn filter_keeps_order() {
        let nodes = filter_nodes([text("a"), Node::Empty, text("b")], |n| !n.is_empty());
        assert_eq!(2, nodes.len());
        assert_eq!("<ul>ab</ul>", ul(nodes));
    }

    #[test]
    fn map_is_sorted_by_key() {
        let mut scores = HashMap::new();
        scores.insert("zed", 1);
        scores.insert("amy", 2);
        let nodes = map_nodes(&scores, |k, v| text(format!("{k}={v};")));
        assert_eq!("<ul>amy=2;zed=1;</ul>", ul(nodes));
    }

    #[test]
    fn reduce_folds_left() {
        let node = reduce_nodes([text("a"), text("b"), text("c")], |acc, n| element("i", [acc, n]));
        assert_eq!("<i><i>ab</i>c</i>", node.html_string());
        assert!(reduce_nodes([], |a, _| a).is_empty());
    }

    #[test]
    fn for_each_indexes() {
        let nodes = for_each(["x", "y"], |s, i| element("li", [text(format!("{i}:{s}"))]));
        assert_eq!("<li>0:x</li><li>1:y</li>", fragment(nodes).html_string());
    }
}
