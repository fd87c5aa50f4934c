//! Conditional class lists.
use std::{collections::HashMap, io};

use crate::{
    Str,
    attribute::Attribute,
    node::{NodeKind, Render},
};

/// A set of class names, each with a flag saying whether it is included.
///
/// Renders as a single `class` attribute holding the included names sorted
/// lexicographically, so the same set always produces the same bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNames {
    classes: HashMap<Str, bool>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusion flag of `class`, replacing any previous flag.
    pub fn insert(&mut self, class: impl Into<Str>, include: bool) -> &mut Self {
        self.classes.insert(class.into(), include);
        self
    }

    /// Builder form of [`ClassNames::insert`].
    pub fn with(mut self, class: impl Into<Str>, include: bool) -> Self {
        self.insert(class, include);
        self
    }

    /// Copy every flag from `other` into `self`. Flags in `other` win.
    pub fn merge(&mut self, other: &ClassNames) -> &mut Self {
        for (class, include) in other.classes.iter() {
            self.classes.insert(class.clone(), *include);
        }
        self
    }

    pub fn get(&self, class: &str) -> Option<bool> {
        self.classes.get(class).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The included class names in render order.
    pub fn included(&self) -> Vec<&str> {
        let mut included = self
            .classes
            .iter()
            .filter_map(|(class, include)| include.then_some(class.as_str()))
            .collect::<Vec<_>>();
        included.sort_unstable();
        included
    }
}

impl Render for ClassNames {
    fn render(&self, w: &mut dyn io::Write) -> io::Result<()> {
        Attribute::with_value("class", self.included().join(" ")).render(w)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Attribute
    }
}

impl<S: Into<Str>> FromIterator<(S, bool)> for ClassNames {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        ClassNames {
            classes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<const N: usize> From<[(&'static str, bool); N]> for ClassNames {
    fn from(classes: [(&'static str, bool); N]) -> Self {
        classes.into_iter().collect()
    }
}

/// Merge several class sets into a new one. Later sets win.
pub fn merge_class_names<'a>(class_names: impl IntoIterator<Item = &'a ClassNames>) -> ClassNames {
    let mut merged = ClassNames::new();
    for names in class_names {
        merged.merge(names);
    }
    merged
}

/// Build a [`ClassNames`] node.
///
/// ```
/// let node = spriggan::class_names! { "btn" => true, "btn-active" => false };
/// assert_eq!(r#" class="btn""#, node.html_string());
/// ```
#[macro_export]
macro_rules! class_names {
    ($($class:expr => $include:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut names = $crate::ClassNames::new();
        $(names.insert($class, $include);)*
        $crate::Node::new(names)
    }};
}

/// Classes htmx toggles on elements while requests are in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HxClassName {
    Added,
    Indicator,
    Request,
    Settling,
    Swapping,
}

impl HxClassName {
    pub fn as_str(&self) -> &'static str {
        match self {
            HxClassName::Added => "htmx-added",
            HxClassName::Indicator => "htmx-indicator",
            HxClassName::Request => "htmx-request",
            HxClassName::Settling => "htmx-settling",
            HxClassName::Swapping => "htmx-swapping",
        }
    }
}

impl From<HxClassName> for Str {
    fn from(class: HxClassName) -> Self {
        class.as_str().into()
    }
}

impl std::fmt::Display for HxClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Node, element};

    #[test]
    fn sorted_and_filtered() {
        let names = ClassNames::from([("b", true), ("a", true), ("c", false)]);
        assert_eq!(r#" class="a b""#, Node::new(names).html_string());
    }

    #[test]
    fn is_an_attribute_child() {
        let names = ClassNames::new().with("btn", true);
        let div = element("div", [crate::text("x"), Node::new(names)]);
        assert_eq!(r#"<div class="btn">x</div>"#, div.html_string());
    }

    #[test]
    fn merge_later_wins() {
        let a = ClassNames::from([("a", true), ("b", false)]);
        let b = ClassNames::from([("b", true), ("c", false)]);
        let merged = merge_class_names([&a, &b]);
        assert_eq!(ClassNames::from([("a", true), ("b", true), ("c", false)]), merged);
    }

    #[test]
    fn macro_builds_node() {
        let node = crate::class_names! {
            "z" => true,
            HxClassName::Indicator => true,
            "hidden" => 1 > 2,
        };
        assert_eq!(r#" class="htmx-indicator z""#, node.html_string());
    }

    #[test]
    fn empty_set_renders_empty_class() {
        assert_eq!(r#" class="""#, Node::new(ClassNames::new()).html_string());
    }
}
