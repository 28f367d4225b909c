//! Compile the markdown card database into `data.json`.
//!
//! Usage: `databuild [DATABASE_DIR] [OUTPUT_FILE]`
//!
//! `DATABASE_DIR` (default `database`) holds one `№<id>.md` file per card
//! and a `topics.md` index mapping topic headings to card links.

use std::fs;
use std::path::Path;

use anyhow::Context;

use prepdeck_core::parser;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let database_dir = args.get(1).map(String::as_str).unwrap_or("database");
    let output_file = args.get(2).map(String::as_str).unwrap_or("data.json");

    let topics_path = Path::new(database_dir).join("topics.md");
    let topics_index = fs::read_to_string(&topics_path)
        .with_context(|| format!("reading topics index {}", topics_path.display()))?;

    let mut card_files = Vec::new();
    for entry in fs::read_dir(database_dir)
        .with_context(|| format!("reading card database {database_dir}"))?
    {
        let path = entry?.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.extension().and_then(|e| e.to_str()) != Some("md") || !stem.starts_with('№') {
            continue;
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        card_files.push((stem.to_string(), content));
    }

    let dataset = parser::compile(&topics_index, &card_files)?;
    fs::write(output_file, dataset.to_json_pretty()?)
        .with_context(|| format!("writing {output_file}"))?;

    println!("{} built: {} cards", output_file, dataset.cards.len());
    Ok(())
}
