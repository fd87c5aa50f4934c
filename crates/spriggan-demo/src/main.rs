//! Renders an example page with spriggan.
//!
//! Run `cargo run -p spriggan-demo -- --help` for the options. Set
//! `RUST_LOG=debug` to see what it is doing.
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use spriggan::prelude::*;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Title of the page
    #[clap(long, default_value = "spriggan")]
    title: String,

    /// Description written into a meta tag
    #[clap(long)]
    description: Option<String>,

    /// Language of the page
    #[clap(long, default_value = "en")]
    lang: String,

    /// Write the page here instead of stdout
    #[clap(long)]
    output: Option<PathBuf>,

    /// Number of items in the list
    #[clap(long, default_value = "3")]
    items: usize,
}

fn item(label: String, index: usize) -> Node {
    li([
        class_names! {
            "item" => true,
            "item-even" => index % 2 == 0,
        },
        data("index", index.to_string()),
        text(label),
    ])
}

fn page(cli: &Cli) -> anyhow::Result<Node> {
    let imports = Imports::new().import("htmx", "https://unpkg.com/htmx.org@2.0.4");
    let labels = (1..=cli.items).map(|n| format!("Item #{n}"));
    let list = ul([id("items"), group(for_each(labels, item))]);
    let more = button([
        type_("button"),
        hx_get("/items"),
        hx_target("#items"),
        hx_swap(Swap::new().style(SwapStyle::BeforeEnd).scroll_bottom(None)),
        hx_indicator(".htmx-indicator"),
        text("More"),
    ]);

    Ok(html5(Html5Props {
        title: cli.title.clone().into(),
        description: cli.description.clone().unwrap_or_default().into(),
        language: cli.lang.clone().into(),
        head: vec![import_map(&imports)?],
        body: vec![
            h1([text(&cli.title)]),
            markdown("Rendered by **spriggan**. Press *More* for more items."),
            list,
            more,
            span([class(HxClassName::Indicator), text("Loading...")]),
        ],
    }))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder().init();

    let cli = Cli::parse();
    let node = page(&cli)?;

    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => {
            log::info!("writing page to {}", path.display());
            let file = std::fs::File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    node.render(&mut sink).context("could not render page")?;
    sink.flush().context("could not flush page")?;
    log::debug!("rendered {} items", cli.items);

    Ok(())
}
