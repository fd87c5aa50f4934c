//! Markdown content nodes.
//!
//! The source is parsed and written to the sink as it renders, so nothing is
//! converted until the page is. Raw HTML inside the source is escaped and
//! shows up as text.
//!
//! ```
//! use spriggan::prelude::*;
//!
//! let node = div([class("post"), markdown("*hi*")]);
//! assert_eq!(r#"<div class="post"><p><em>hi</em></p>
//! </div>"#, node.html_string());
//! ```
use std::io;

use pulldown_cmark::{Event, Options, Parser};

use crate::{Node, Str, node::Render};

/// Markdown source rendered as HTML content.
#[derive(Clone, Debug)]
pub struct Markdown {
    source: Str,
    options: Options,
}

impl Markdown {
    pub fn new(source: impl Into<Str>, options: Options) -> Self {
        Markdown {
            source: source.into(),
            options,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Render for Markdown {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        let events = Parser::new_ext(&self.source, self.options).map(|event| match event {
            Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
            event => event,
        });
        pulldown_cmark::html::write_html_io(w, events)
    }
}

/// Tables, footnotes and strikethrough on top of CommonMark.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH
}

/// Render `source` as markdown with [`markdown_options`].
pub fn markdown(source: impl Into<Str>) -> Node {
    markdown_with(source, markdown_options())
}

/// Render `source` as markdown with the given parser extensions.
pub fn markdown_with(source: impl Into<Str>, options: Options) -> Node {
    Node::new(Markdown::new(source, options))
}
