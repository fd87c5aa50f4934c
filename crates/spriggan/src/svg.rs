//! Inline SVG.
use crate::{Node, Str, attr, element, group};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An `<svg>` element in the SVG namespace.
pub fn svg(children: impl IntoIterator<Item = Node>) -> Node {
    element("svg", [attr("xmlns", SVG_NAMESPACE), group(children)])
}

pub fn path(children: impl IntoIterator<Item = Node>) -> Node {
    element("path", children)
}

pub fn clip_rule(v: impl Into<Str>) -> Node {
    attr("clip-rule", v)
}

/// Path data, eg `d("M10 10 L20 20")`.
pub fn d(v: impl Into<Str>) -> Node {
    attr("d", v)
}

pub fn fill(v: impl Into<Str>) -> Node {
    attr("fill", v)
}

pub fn fill_rule(v: impl Into<Str>) -> Node {
    attr("fill-rule", v)
}

pub fn stroke(v: impl Into<Str>) -> Node {
    attr("stroke", v)
}

pub fn stroke_width(v: impl Into<Str>) -> Node {
    attr("stroke-width", v)
}

pub fn stroke_linecap(v: impl Into<Str>) -> Node {
    attr("stroke-linecap", v)
}

pub fn stroke_linejoin(v: impl Into<Str>) -> Node {
    attr("stroke-linejoin", v)
}

pub fn view_box(v: impl Into<Str>) -> Node {
    attr("viewBox", v)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_svg_has_namespace() {
        assert_eq!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#,
            svg([]).html_string()
        );
    }

    #[test]
    fn icon() {
        let icon = svg([
            view_box("0 0 24 24"),
            fill("none"),
            path([stroke_linecap("round"), d("M6 18L18 6")]),
        ]);
        assert_eq!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"><path stroke-linecap="round" d="M6 18L18 6"></path></svg>"#,
            icon.html_string()
        );
    }
}
