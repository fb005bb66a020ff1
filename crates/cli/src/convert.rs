use crate::load_tag_file;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tagdex_core::{TagFileConfig, sort_tags, write_tags};
use tracing::info;

pub fn run(
    input: &Path,
    output: &Path,
    dedup: bool,
    config: &TagFileConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tags = load_tag_file(input, config)?;
    sort_tags(&mut tags, config.sort_keys(), dedup || config.dedup);

    let mut writer = BufWriter::new(File::create(output)?);
    write_tags(&tags, &mut writer, config.write_attrs)?;
    writer.flush()?;

    info!("Wrote {} tags to {}", tags.len(), output.display());
    Ok(())
}
