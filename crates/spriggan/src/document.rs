//! Whole HTML5 documents.
use crate::{
    Node, Str,
    attrs::{charset, content, lang, name},
    group,
    html::{body, doctype, head, html, meta, title_element},
    if_then, text,
};

/// What goes into an [`html5`] document.
#[derive(Clone, Debug, Default)]
pub struct Html5Props {
    pub title: Str,
    /// Written as a `description` meta tag when not empty.
    pub description: Str,
    /// Written as the `lang` of `<html>` when not empty.
    pub language: Str,
    /// Extra nodes appended to `<head>`, eg stylesheets and scripts.
    pub head: Vec<Node>,
    pub body: Vec<Node>,
}

/// A complete HTML5 document with a UTF-8 charset and a responsive
/// viewport.
pub fn html5(props: Html5Props) -> Node {
    let Html5Props {
        title,
        description,
        language,
        head: head_nodes,
        body: body_nodes,
    } = props;
    let has_description = !description.is_empty();
    doctype(html([
        if_then(!language.is_empty(), lang(language)),
        head([
            meta([charset("utf-8")]),
            meta([
                name("viewport"),
                content("width=device-width, initial-scale=1"),
            ]),
            title_element([text(title)]),
            if_then(
                has_description,
                meta([name("description"), content(description)]),
            ),
            group(head_nodes),
        ]),
        body(body_nodes),
    ]))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::html::{link, p};

    #[test]
    fn minimal_document() {
        let doc = html5(Html5Props {
            title: "Home".into(),
            ..Default::default()
        });
        assert_eq!(
            concat!(
                "<!doctype html><html><head>",
                r#"<meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                "<title>Home</title>",
                "</head><body></body></html>"
            ),
            doc.html_string()
        );
    }

    #[test]
    fn full_document() {
        let doc = html5(Html5Props {
            title: "A & B".into(),
            description: "about".into(),
            language: "en".into(),
            head: vec![link([crate::attr("rel", "stylesheet")])],
            body: vec![p([text("hi")])],
        });
        let html = doc.html_string();
        assert!(html.starts_with(r#"<!doctype html><html lang="en"><head>"#));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="about"><link rel="stylesheet"></head>"#
        ));
        assert!(html.ends_with("<body><p>hi</p></body></html>"));
    }
}
