//! Constructors for HTML5 elements.
//!
//! Each function takes the element's children, attributes and content mixed
//! in any order. Element names that would clash with an attribute helper in
//! [`crate::attrs`] carry an `_element` suffix, eg [`title_element`] since
//! [`crate::attrs::title`] builds the attribute.
use std::io;

use crate::{Node, element};

macro_rules! define_elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", $tag, ">` element.")]
            pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
                element($tag, children)
            }
        )*
    };
}

define_elements! {
    a => "a",
    abbr => "abbr",
    address => "address",
    area => "area",
    article => "article",
    aside => "aside",
    audio => "audio",
    b => "b",
    base => "base",
    blockquote => "blockquote",
    body => "body",
    br => "br",
    button => "button",
    canvas => "canvas",
    caption => "caption",
    cite => "cite",
    code => "code",
    col => "col",
    colgroup => "colgroup",
    data_element => "data",
    datalist => "datalist",
    dd => "dd",
    del => "del",
    details => "details",
    dfn => "dfn",
    dialog => "dialog",
    div => "div",
    dl => "dl",
    dt => "dt",
    em => "em",
    embed => "embed",
    fieldset => "fieldset",
    figcaption => "figcaption",
    figure => "figure",
    footer => "footer",
    form_element => "form",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    head => "head",
    header => "header",
    hgroup => "hgroup",
    hr => "hr",
    html => "html",
    i => "i",
    iframe => "iframe",
    img => "img",
    input => "input",
    ins => "ins",
    kbd => "kbd",
    label => "label",
    legend => "legend",
    li => "li",
    link => "link",
    main => "main",
    mark => "mark",
    menu => "menu",
    meta => "meta",
    meter => "meter",
    nav => "nav",
    noscript => "noscript",
    object => "object",
    ol => "ol",
    optgroup => "optgroup",
    option => "option",
    p => "p",
    param => "param",
    picture => "picture",
    pre => "pre",
    progress => "progress",
    q => "q",
    s => "s",
    samp => "samp",
    script => "script",
    section => "section",
    select => "select",
    small => "small",
    source => "source",
    span => "span",
    strong => "strong",
    style_element => "style",
    sub => "sub",
    summary => "summary",
    sup => "sup",
    table => "table",
    tbody => "tbody",
    td => "td",
    textarea => "textarea",
    tfoot => "tfoot",
    th => "th",
    thead => "thead",
    time => "time",
    title_element => "title",
    tr => "tr",
    u => "u",
    ul => "ul",
    var => "var",
    video => "video",
    wbr => "wbr",
}

/// Write `<!doctype html>` and then `node`.
pub fn doctype(node: Node) -> Node {
    Node::from_fn(move |w: &mut dyn io::Write| {
        w.write_all(b"<!doctype html>")?;
        node.render(w)
    })
}
