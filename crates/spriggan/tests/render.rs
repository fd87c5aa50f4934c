//! End to end rendering behavior.
use std::io;

use spriggan::prelude::*;

/// A sink that fails on its `fail_on`th write and counts every call.
struct FailingSink {
    fail_on: usize,
    writes: usize,
    bytes: Vec<u8>,
}

impl FailingSink {
    fn new(fail_on: usize) -> Self {
        FailingSink {
            fail_on,
            writes: 0,
            bytes: vec![],
        }
    }
}

impl io::Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        if self.writes == self.fail_on {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn page() -> Node {
    div([
        id("root"),
        h1([text("Title")]),
        group([p([text("one")]), p([class("two"), text("two")])]),
        ul([li([text("a")]), li([text("b")]), li([text("c")])]),
        input([type_("text"), disabled()]),
    ])
}

#[test]
fn end_to_end_paragraph() {
    let p = element("p", [attr("id", "x"), text("hi <there>")]);
    assert_eq!(r#"<p id="x">hi &lt;there&gt;</p>"#, p.html_string());
}

#[test]
fn non_void_elements_close() {
    for tag in ["div", "p", "span", "ul", "li", "section", "textarea", "script"] {
        assert_eq!(format!("<{tag}></{tag}>"), element(tag, []).html_string());
    }
}

#[test]
fn void_elements_never_close() {
    for tag in spriggan::VOID_ELEMENTS {
        let el = element(tag, [text("content"), attr("class", "c"), p([])]);
        assert_eq!(format!(r#"<{tag} class="c">"#), el.html_string());
    }
}

#[test]
fn attributes() {
    assert_eq!(" disabled", attribute("disabled", None::<&str>).html_string());
    assert_eq!(r#" href="/x""#, attribute("href", Some("/x")).html_string());
    let quoted = attribute("href", Some("a\"b")).html_string();
    assert_eq!(r#" href="a&quot;b""#, quoted);
}

#[test]
fn conditionals() {
    assert_eq!("<div></div>", div([if_then(false, text("x"))]).html_string());
    assert_eq!("<div>x &amp; y</div>", div([if_then(true, text("x & y"))]).html_string());
}

#[test]
fn group_is_transparent() {
    let grouped = div([group([text("a"), text("b")])]).html_string();
    let direct = div([text("a"), text("b")]).html_string();
    assert_eq!("<div>ab</div>", grouped);
    assert_eq!(direct, grouped);
    assert_eq!("<div></div>", div([group([])]).html_string());
    assert_eq!(
        "<div>a</div>",
        div([group([group([group([text("a")])])])]).html_string()
    );
}

#[test]
fn class_names_sorted() {
    let names = ClassNames::from([("b", true), ("a", true), ("c", false)]);
    assert_eq!(r#" class="a b""#, Node::new(names).html_string());
}

#[test]
fn rendering_is_idempotent() {
    let node = page();
    let mut first = vec![];
    let mut second = vec![];
    node.render(&mut first).unwrap();
    node.render(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn first_error_stops_the_render() {
    let node = page();
    let mut ok = FailingSink::new(usize::MAX);
    node.render(&mut ok).unwrap();
    let total = ok.writes;
    assert!(total > 5);

    for fail_on in 1..=total {
        let mut sink = FailingSink::new(fail_on);
        let err = node.render(&mut sink).unwrap_err();
        assert_eq!(io::ErrorKind::BrokenPipe, err.kind());
        assert_eq!("sink closed", err.to_string());
        assert_eq!(fail_on, sink.writes, "wrote after failing on write {fail_on}");
        assert!(ok.bytes.starts_with(&sink.bytes));
    }
}

#[test]
fn fallback_hides_partial_output() {
    let node = div([fallback(page(), |err| {
        assert!(err.is_some());
        text("unavailable")
    })]);
    let failing = Node::from_fn(|w| {
        w.write_all(b"<half")?;
        Err(io::Error::other("nope"))
    });
    assert!(node.html_string().starts_with(r#"<div><div id="root">"#));
    let node = div([fallback(failing, |_| text("unavailable"))]);
    assert_eq!("<div>unavailable</div>", node.html_string());
}

#[test]
fn standalone_fragment() {
    assert_eq!("ab", fragment([text("a"), text("b")]).html_string());
}

#[test]
fn document() {
    let doc = html5(Html5Props {
        title: "t".into(),
        body: vec![page()],
        ..Default::default()
    });
    let html = doc.html_string();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains(r#"<input type="text" disabled>"#));
}

#[test]
fn swap_builder() {
    let swap = Swap::new()
        .style(SwapStyle::OuterHtml)
        .scroll_top(None)
        .transition(true);
    assert_eq!("outerHTML scroll:top transition:true", swap.to_string());
}

#[test]
fn svg_namespace() {
    assert_eq!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#,
        svg([]).html_string()
    );
}

#[test]
fn nodes_render_across_threads() {
    let node = page();
    let expected = node.html_string();
    let handles = (0..4)
        .map(|_| {
            let node = node.clone();
            std::thread::spawn(move || node.html_string())
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(expected, handle.join().unwrap());
    }
}
