//! Elements and the streaming renderer.
use std::io;

use crate::{
    Str,
    node::{Node, NodeKind, Render},
};

// From https://html.spec.whatwg.org/multipage/syntax.html#void-elements
// plus the obsolete `command`, `keygen` and `param`, which browsers still
// parse as void. Writing content into one of these does spooky things to
// the DOM at parse-time, so the renderer stops after the opening tag.
/// Tags that never have a closing tag or content.
pub const VOID_ELEMENTS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Whether `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Wraps a sink, remembering the first write error and skipping everything
/// after it.
struct StatefulWriter<'a> {
    inner: &'a mut dyn io::Write,
    err: Option<io::Error>,
}

impl<'a> StatefulWriter<'a> {
    fn new(inner: &'a mut dyn io::Write) -> Self {
        Self { inner, err: None }
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.err.is_some() {
            return;
        }
        if let Err(e) = self.inner.write_all(bytes) {
            self.err = Some(e);
        }
    }

    /// Render `child` if it plays the role `kind`, expanding groups in place.
    fn render_child(&mut self, child: &Node, kind: NodeKind) {
        if self.err.is_some() {
            return;
        }
        match child {
            Node::Empty => {}
            Node::Group(children) => {
                for child in children.iter() {
                    self.render_child(child, kind);
                }
            }
            Node::Dyn(render) => {
                if render.kind() == kind {
                    if let Err(e) = render.render(&mut *self.inner) {
                        self.err = Some(e);
                    }
                }
            }
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// An HTML element: a tag name and a flat list of children.
///
/// Attribute children are written into the opening tag and everything else
/// becomes content, regardless of the order they were given in.
#[derive(Clone, Debug)]
pub struct Element {
    name: Str,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<Str>, children: impl IntoIterator<Item = Node>) -> Self {
        Element {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Render for Element {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        let mut w = StatefulWriter::new(w);

        w.write(b"<");
        w.write(self.name.as_bytes());
        for child in self.children.iter() {
            w.render_child(child, NodeKind::Attribute);
        }
        w.write(b">");

        if is_void_element(&self.name) {
            return w.finish();
        }

        for child in self.children.iter() {
            w.render_child(child, NodeKind::Element);
        }
        w.write(b"</");
        w.write(self.name.as_bytes());
        w.write(b">");

        w.finish()
    }
}

/// Create an element node.
pub fn element(name: impl Into<Str>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(Element::new(name, children))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{attr, bool_attr, group, text};

    #[test]
    fn empty_element() {
        assert_eq!("<a></a>", element("a", []).html_string());
        assert_eq!("<div></div>", element("div", []).html_string());
    }

    #[test]
    fn attributes_are_hoisted() {
        let p = element("p", [text("hi"), attr("id", "x"), bool_attr("hidden")]);
        assert_eq!(r#"<p id="x" hidden>hi</p>"#, p.html_string());
    }

    #[test]
    fn void_elements_drop_content() {
        for tag in VOID_ELEMENTS {
            assert!(is_void_element(tag));
            let el = element(tag, [attr("a", "b"), text("dropped")]);
            assert_eq!(format!(r#"<{tag} a="b">"#), el.html_string());
        }
        assert!(!is_void_element("div"));
        assert!(!is_void_element("BR"));
    }

    #[test]
    fn nested_groups_flatten() {
        let el = element(
            "ul",
            [
                group([attr("id", "list"), group([text("a"), Node::Empty])]),
                text("b"),
            ],
        );
        assert_eq!(r#"<ul id="list">ab</ul>"#, el.html_string());
    }
}
