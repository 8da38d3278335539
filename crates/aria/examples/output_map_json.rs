//! Write every table to ./json/<table>.json
//!
//! Run with: cargo run --example output_map_json

use aria::AriaQuery;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let out_dir = Path::new("json");
    if !out_dir.exists() {
        fs::create_dir_all(out_dir)?;
    }

    let query = AriaQuery::load()?;
    for (stem, json) in query.to_json_tables()? {
        let path = out_dir.join(format!("{}.json", stem));
        fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "Wrote table");
    }

    Ok(())
}
