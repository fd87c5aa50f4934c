//! Attribute nodes.
use std::io;

use crate::{
    Str,
    node::{Node, NodeKind, Render},
};

/// An attribute of an element's opening tag.
///
/// Renders self-delimited with a leading space: ` disabled` when it has no
/// value and ` name="value"` with the value escaped when it does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: Str,
    value: Option<Str>,
}

impl Attribute {
    /// A name-only (boolean) attribute.
    pub fn boolean(name: impl Into<Str>) -> Self {
        Attribute {
            name: name.into(),
            value: None,
        }
    }

    /// A `name="value"` attribute.
    pub fn with_value(name: impl Into<Str>, value: impl Into<Str>) -> Self {
        Attribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Render for Attribute {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        match &self.value {
            None => w.write_all(format!(" {}", self.name).as_bytes()),
            Some(value) => w.write_all(
                format!(
                    r#" {}="{}""#,
                    self.name,
                    html_escape::encode_quoted_attribute(value.as_str())
                )
                .as_bytes(),
            ),
        }
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Attribute
    }
}

/// Create an attribute from a name and zero or one values.
///
/// ## Panics
/// Panics if more than one value is given. Extra values are never silently
/// concatenated or dropped.
pub fn attribute<V: Into<Str>>(name: impl Into<Str>, values: impl IntoIterator<Item = V>) -> Node {
    let mut values = values.into_iter();
    let attribute = match (values.next(), values.next()) {
        (None, _) => Attribute::boolean(name),
        (Some(value), None) => Attribute::with_value(name, value),
        (Some(_), Some(_)) => panic!("attribute must be just name or name and value pair"),
    };
    Node::new(attribute)
}

/// Create a `name="value"` attribute.
pub fn attr(name: impl Into<Str>, value: impl Into<Str>) -> Node {
    Node::new(Attribute::with_value(name, value))
}

/// Create a name-only attribute, eg `disabled`.
pub fn bool_attr(name: impl Into<Str>) -> Node {
    Node::new(Attribute::boolean(name))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn boolean_attribute() {
        assert_eq!(" disabled", bool_attr("disabled").html_string());
        assert_eq!(NodeKind::Attribute, bool_attr("disabled").kind());
    }

    #[test]
    fn valued_attribute() {
        assert_eq!(r#" href="/x""#, attr("href", "/x").html_string());
        assert_eq!(r#" data-tip="""#, attr("data-tip", "").html_string());
    }

    #[test]
    fn value_is_escaped() {
        let html = attr("title", r#"a"b<c>&'d"#).html_string();
        let inner = html
            .strip_prefix(r#" title=""#)
            .and_then(|s| s.strip_suffix('"'))
            .unwrap();
        for c in ['"', '<', '>', '\''] {
            assert!(!inner.contains(c), "{c} was not escaped in {inner}");
        }
        assert!(inner.contains("&amp;"));
        assert!(inner.contains("&lt;"));
    }

    #[test]
    fn attribute_arity() {
        assert_eq!(" checked", attribute("checked", None::<&str>).html_string());
        assert_eq!(r#" id="x""#, attribute("id", ["x"]).html_string());
    }

    #[test]
    #[should_panic(expected = "attribute must be just name or name and value pair")]
    fn attribute_with_two_values_panics() {
        let _ = attribute("class", ["a", "b"]);
    }
}
