use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pemscope::render::{JsonRenderer, RenderRecord, TextRenderer};
use pemscope::PemInspector;

/// Inspect a PEM credential and print its display-ready fields.
#[derive(Debug, Parser)]
#[command(name = "pemscope", version, about)]
struct Args {
    /// Path to a PEM file; reads standard input when omitted.
    input: Option<PathBuf>,

    /// Emit the record as pretty-printed JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pem = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("couldn't read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("couldn't read standard input")?;
            buf
        }
    };

    let record = PemInspector::new().inspect(&pem);
    let rendered = if args.json {
        JsonRenderer.render(&record)
    } else {
        TextRenderer.render(&record)
    };
    println!("{rendered}");

    Ok(())
}
