use crate::load_tag_file;
use std::io::Write;
use std::path::Path;
use tagdex_core::{TagFileConfig, find_tags, print_tags, sort_tags};
use tracing::info;

pub fn run<W: Write>(
    path: &Path,
    name: &str,
    partial: bool,
    sorted: bool,
    config: &TagFileConfig,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tags = load_tag_file(path, config)?;
    if sorted {
        // Search needs name order, whatever the configured keys are.
        sort_tags(&mut tags, None, false);
    }

    match find_tags(&tags, name, partial, sorted) {
        Some(found) => {
            info!("Found {} tags matching {}", found.len(), name);
            print_tags(found, out)?;
        }
        None => info!("No tags matching {}", name),
    }
    Ok(())
}
