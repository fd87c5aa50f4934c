//! # Spriggan
//!
//! Spriggan builds HTML on the server and streams it straight into any
//! [`std::io::Write`].
//!
//! A page is a tree of [`Node`]s. An element takes one flat list of children
//! and sorts them out at render time: attribute children are written into
//! the opening tag, everything else becomes content. That keeps composition
//! ergonomic, a helper can return an attribute, some text or a whole
//! subtree, and the caller never has to care which:
//!
//! ```
//! use spriggan::prelude::*;
//!
//! let greeting = |name: &str| group([class("greeting"), textf!("hi {name}")]);
//! let node = div([id("main"), greeting("<you>"), hx_get("/more")]);
//! assert_eq!(
//!     r#"<div id="main" class="greeting" hx-get="/more">hi &lt;you&gt;</div>"#,
//!     node.html_string()
//! );
//! ```
//!
//! ## Errors
//! Rendering returns the sink's [`std::io::Error`] untouched and stops
//! writing at the first failure. Building nodes wrongly, eg giving
//! [`attribute`] two values or rendering a bare [`group`], panics.
//!
//! ## htmx
//! The [`htmx`] and [`swap`] modules cover the `hx-*` attribute vocabulary.
//! Spriggan only emits the attributes, what they do is up to the htmx
//! script on the client.
//!
//! ## Features
//! - `importmap` (default): [`importmap::import_map`], serialized with serde.
//! - `markdown` (default): [`markdown::markdown`] content nodes, rendered with
//!   pulldown-cmark.
pub mod attribute;
pub mod attrs;
pub mod class_names;
pub mod combinator;
pub mod document;
pub mod element;
pub mod html;
pub mod htmx;
#[cfg(feature = "importmap")]
pub mod importmap;
pub mod iter;
#[cfg(feature = "markdown")]
pub mod markdown;
pub mod node;
pub mod str;
pub mod svg;
pub mod swap;
pub mod text;

pub use attribute::{Attribute, attr, attribute, bool_attr};
pub use class_names::{ClassNames, HxClassName, merge_class_names};
pub use combinator::{
    ErrorBoundary, Fallback, Fragment, error_boundary, fallback, fragment, group, if_else,
    if_then, key_exists,
};
pub use element::{Element, VOID_ELEMENTS, element, is_void_element};
pub use node::{Node, NodeFn, NodeKind, Render};
pub use str::Str;
pub use text::{Raw, Text, raw, text};

pub mod prelude {
    //! Re-exports for convenience
    pub use super::attrs::*;
    pub use super::document::*;
    pub use super::html::*;
    pub use super::htmx::*;
    #[cfg(feature = "importmap")]
    pub use super::importmap::*;
    pub use super::iter::*;
    #[cfg(feature = "markdown")]
    pub use super::markdown::*;
    pub use super::svg::*;
    pub use super::swap::*;
    pub use super::{
        Attribute, ClassNames, Element, HxClassName, Node, NodeKind, Render, Str, attr,
        attribute, bool_attr, class_names, element, error_boundary, fallback, fragment, group,
        if_else, if_then, key_exists, merge_class_names, raw, rawf, text, textf,
    };
}
