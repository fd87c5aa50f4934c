//! `<script type="importmap">`.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script/type/importmap>.
use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;

use crate::{Node, attr, html::script, raw};

/// An import map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Imports {
    /// Module specifier to URL.
    pub imports: BTreeMap<String, String>,
    /// Scope prefix to its own specifier map.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scopes: BTreeMap<String, BTreeMap<String, String>>,
    /// URL to integrity metadata.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub integrity: BTreeMap<String, String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, specifier: impl Into<String>, url: impl Into<String>) -> Self {
        self.imports.insert(specifier.into(), url.into());
        self
    }

    pub fn scoped(
        mut self,
        scope: impl Into<String>,
        specifier: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.scopes
            .entry(scope.into())
            .or_default()
            .insert(specifier.into(), url.into());
        self
    }

    pub fn integrity(mut self, url: impl Into<String>, hash: impl Into<String>) -> Self {
        self.integrity.insert(url.into(), hash.into());
        self
    }
}

/// A script element holding `imports` as pretty-printed JSON.
///
/// `<`, `>` and `&` are written as JSON unicode escapes so no value can close
/// the script element early.
pub fn import_map(imports: &Imports) -> anyhow::Result<Node> {
    let json = serde_json::to_string_pretty(imports).context("could not serialize import map")?;
    let json = json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");
    Ok(script([attr("type", "importmap"), raw(json)]))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_optional_maps_are_omitted() {
        let imports = Imports::new().import("htmx", "/js/htmx.js");
        let node = import_map(&imports).unwrap();
        assert_eq!(
            "<script type=\"importmap\">{\n  \"imports\": {\n    \"htmx\": \"/js/htmx.js\"\n  }\n}</script>",
            node.html_string()
        );
    }

    #[test]
    fn scopes_and_integrity() {
        let imports = Imports::new()
            .import("a", "/a.js")
            .scoped("/admin/", "a", "/admin/a.js")
            .integrity("/a.js", "sha384-abc");
        let json = import_map(&imports).unwrap().html_string();
        assert!(json.contains(r#""scopes": {"#));
        assert!(json.contains(r#""/admin/": {"#));
        assert!(json.contains(r#""/a.js": "sha384-abc""#));
    }

    #[test]
    fn empty_imports_still_written() {
        let json = import_map(&Imports::new()).unwrap().html_string();
        assert!(json.contains(r#""imports": {}"#));
    }

    #[test]
    fn closing_script_tag_is_escaped() {
        let imports = Imports::new().import("x", "/a.js</script><script>alert(1)</script>");
        let html = import_map(&imports).unwrap().html_string();
        assert!(!html.contains("</script><script>"));
        assert!(html.contains(r#""/a.js\u003c/script\u003e\u003cscript\u003ealert(1)"#));
        assert!(html.ends_with("}</script>"));
        assert_eq!(1, html.matches("</script>").count());

        let json = html
            .trim_start_matches(r#"<script type="importmap">"#)
            .trim_end_matches("</script>");
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!("/a.js</script><script>alert(1)</script>", value["imports"]["x"]);
    }

    #[test]
    fn ampersands_are_escaped() {
        let imports = Imports::new().import("q", "/q.js?a=1&b=2");
        let html = import_map(&imports).unwrap().html_string();
        assert!(html.contains(r#""/q.js?a=1\u0026b=2""#));
    }
}
