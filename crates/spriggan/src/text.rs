//! Text and raw content leaves.
use std::io;

use crate::{
    Str,
    node::{Node, Render},
};

/// Escaped text content.
///
/// Quotes are escaped along with `&`, `<` and `>`, so text is also safe to
/// drop inside attribute-like contexts such as `<title>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text(pub Str);

impl Render for Text {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        w.write_all(html_escape::encode_quoted_attribute(self.0.as_str()).as_bytes())
    }
}

/// Unescaped content, written verbatim.
///
/// The caller is responsible for the markup being safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raw(pub Str);

impl Render for Raw {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        w.write_all(self.0.as_bytes())
    }
}

/// Create an escaped text node.
pub fn text(s: impl Into<Str>) -> Node {
    Node::new(Text(s.into()))
}

/// Create a raw, unescaped node.
pub fn raw(s: impl Into<Str>) -> Node {
    Node::new(Raw(s.into()))
}

/// Create an escaped text node from format arguments.
#[macro_export]
macro_rules! textf {
    ($($arg:tt)*) => {
        $crate::text(::std::format!($($arg)*))
    };
}

/// Create a raw node from format arguments.
#[macro_export]
macro_rules! rawf {
    ($($arg:tt)*) => {
        $crate::raw(::std::format!($($arg)*))
    };
}
