use crate::load_tag_file;
use std::io::Write;
use std::path::Path;
use tagdex_api::{KindMask, TagKind};
use tagdex_core::{TagFileConfig, extract_tags, print_tags, sort_tags};

pub fn run<W: Write>(
    path: &Path,
    kinds: &[String],
    sort: bool,
    config: &TagFileConfig,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tags = load_tag_file(path, config)?;
    if sort {
        sort_tags(&mut tags, config.sort_keys(), config.dedup);
    }

    if kinds.is_empty() {
        print_tags(&tags, out)?;
    } else {
        let mask = parse_kinds(kinds)?;
        print_tags(&extract_tags(&tags, mask), out)?;
    }
    Ok(())
}

/// Accepts both parse names (`enumerator`) and display names (`enumval`).
fn parse_kinds(kinds: &[String]) -> Result<KindMask, String> {
    kinds
        .iter()
        .map(|name| {
            let name = name.trim();
            TagKind::from_name(name)
                .or_else(|| TagKind::from_display_name(name))
                .ok_or_else(|| format!("Unknown tag kind: {name}"))
        })
        .collect()
}
