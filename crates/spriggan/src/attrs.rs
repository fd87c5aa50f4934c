//! Constructors for common HTML attributes.
//!
//! Names that are Rust keywords carry a trailing underscore, eg [`type_`].
use crate::{Node, Str, attr, bool_attr};

macro_rules! boolean_attrs {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("The boolean `", $attr, "` attribute.")]
            pub fn $name() -> Node {
                bool_attr($attr)
            }
        )*
    };
}

macro_rules! valued_attrs {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $attr, "` attribute.")]
            pub fn $name(value: impl Into<Str>) -> Node {
                attr($attr, value)
            }
        )*
    };
}

boolean_attrs! {
    async_ => "async",
    autofocus => "autofocus",
    autoplay => "autoplay",
    checked => "checked",
    controls => "controls",
    defer => "defer",
    disabled => "disabled",
    loop_ => "loop",
    multiple => "multiple",
    muted => "muted",
    novalidate => "novalidate",
    playsinline => "playsinline",
    readonly => "readonly",
    required => "required",
    selected => "selected",
}

valued_attrs! {
    accept => "accept",
    action => "action",
    alt => "alt",
    as_ => "as",
    autocomplete => "autocomplete",
    charset => "charset",
    class => "class",
    cols => "cols",
    colspan => "colspan",
    content => "content",
    contenteditable => "contenteditable",
    crossorigin => "crossorigin",
    enctype => "enctype",
    for_ => "for",
    form => "form",
    height => "height",
    href => "href",
    id => "id",
    integrity => "integrity",
    is => "is",
    lang => "lang",
    list => "list",
    loading => "loading",
    max => "max",
    maxlength => "maxlength",
    method => "method",
    min => "min",
    minlength => "minlength",
    name => "name",
    onclick => "onclick",
    pattern => "pattern",
    placeholder => "placeholder",
    poster => "poster",
    preload => "preload",
    rel => "rel",
    role => "role",
    rows => "rows",
    rowspan => "rowspan",
    src => "src",
    srcset => "srcset",
    step => "step",
    style => "style",
    tabindex => "tabindex",
    target => "target",
    title => "title",
    type_ => "type",
    value => "value",
    width => "width",
}

/// An `aria-{name}` attribute.
pub fn aria(name: impl AsRef<str>, value: impl Into<Str>) -> Node {
    attr(format!("aria-{}", name.as_ref()), value)
}

/// A `data-{name}` attribute.
pub fn data(name: impl AsRef<str>, value: impl Into<Str>) -> Node {
    attr(format!("data-{}", name.as_ref()), value)
}

/// Tells 1Password to leave a field alone.
pub fn one_password_ignore() -> Node {
    bool_attr("data-1p-ignore")
}

/// Inline event handler attribute names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsEvent {
    Click,
    Change,
    Input,
    Focus,
    Blur,
    KeyDown,
    KeyUp,
    KeyPress,
    Submit,
    Load,
    Unload,
    Resize,
    Scroll,
    DblClick,
    MouseOver,
    MouseOut,
    MouseMove,
    MouseDown,
    MouseUp,
    ContextMenu,
    DragStart,
    Drag,
    DragEnter,
    DragLeave,
    DragOver,
    Drop,
    DragEnd,
}

impl JsEvent {
    /// The attribute name, eg `onclick`.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsEvent::Click => "onclick",
            JsEvent::Change => "onchange",
            JsEvent::Input => "oninput",
            JsEvent::Focus => "onfocus",
            JsEvent::Blur => "onblur",
            JsEvent::KeyDown => "onkeydown",
            JsEvent::KeyUp => "onkeyup",
            JsEvent::KeyPress => "onkeypress",
            JsEvent::Submit => "onsubmit",
            JsEvent::Load => "onload",
            JsEvent::Unload => "onunload",
            JsEvent::Resize => "onresize",
            JsEvent::Scroll => "onscroll",
            JsEvent::DblClick => "ondblclick",
            JsEvent::MouseOver => "onmouseover",
            JsEvent::MouseOut => "onmouseout",
            JsEvent::MouseMove => "onmousemove",
            JsEvent::MouseDown => "onmousedown",
            JsEvent::MouseUp => "onmouseup",
            JsEvent::ContextMenu => "oncontextmenu",
            JsEvent::DragStart => "ondragstart",
            JsEvent::Drag => "ondrag",
            JsEvent::DragEnter => "ondragenter",
            JsEvent::DragLeave => "ondragleave",
            JsEvent::DragOver => "ondragover",
            JsEvent::Drop => "ondrop",
            JsEvent::DragEnd => "ondragend",
        }
    }
}

impl std::fmt::Display for JsEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline event handler, eg `on(JsEvent::Click, "go()")`.
pub fn on(event: JsEvent, js: impl Into<Str>) -> Node {
    attr(event.as_str(), js)
}

/// `"true"` or `"false"`.
pub fn as_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Whether `s` reads as true. Only `"true"` does.
pub fn as_bool(s: &str) -> bool {
    s == "true"
}
