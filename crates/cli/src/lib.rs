mod convert;
mod find;
mod print;

use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tagdex_api::TagRef;
use tagdex_core::{TagFileConfig, TagFileFormat, load_tags};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tagdex",
    version,
    about = "Inspect, search and convert symbol tag files",
    long_about = "Tagdex reads tag files in the native, pipe-delimited or ctags formats into an \
                  in-memory symbol index, then searches, renders or rewrites it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How the input tag file is read.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input format: native, pipe or ctags. Overrides the config file.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<TagFileFormat>,
    /// JSON config with format, language, sort keys, dedup and writer attributes
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    pub fn resolve(&self) -> tagdex_core::Result<TagFileConfig> {
        let mut config = match &self.config {
            Some(path) => TagFileConfig::from_path(path)?,
            None => TagFileConfig::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up tags by name
    #[command(
        long_about = "Loads the tag file, orders it by name and prints every record whose name \
                            matches. Matching ignores case and any array suffix such as `[10]`."
    )]
    Find {
        /// Tag file to search
        #[arg(value_name = "TAG_FILE")]
        path: PathBuf,
        /// Name, or name prefix with --partial
        #[arg(value_name = "NAME")]
        name: String,
        /// Match names starting with NAME
        #[arg(long)]
        partial: bool,
        /// Scan the file in its stored order instead of sorting it first
        #[arg(long)]
        unsorted: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Render tags one per line
    Print {
        /// Tag file to print
        #[arg(value_name = "TAG_FILE")]
        path: PathBuf,
        /// Only print these kinds (comma separated, e.g. class,function)
        #[arg(short, long, value_delimiter = ',', value_name = "KINDS")]
        kinds: Vec<String>,
        /// Sort by the configured keys before printing
        #[arg(long)]
        sort: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Rewrite a tag file in the native format
    #[command(
        long_about = "Loads the tag file, sorts it by the configured keys and writes it as a \
                            native tag file with the configured attributes."
    )]
    Convert {
        /// Tag file to read
        #[arg(value_name = "INPUT")]
        input_path: PathBuf,
        /// Native tag file to write
        #[arg(value_name = "OUTPUT")]
        output_path: PathBuf,
        /// Drop duplicate records after sorting
        #[arg(long)]
        dedup: bool,
        #[command(flatten)]
        input: InputArgs,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = tagdex_core::logging::init_logging("cli", true);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Find {
            path,
            name,
            partial,
            unsorted,
            input,
        } => find::run(&path, &name, partial, !unsorted, &input.resolve()?, &mut out),
        Commands::Print {
            path,
            kinds,
            sort,
            input,
        } => print::run(&path, &kinds, sort, &input.resolve()?, &mut out),
        Commands::Convert {
            input_path,
            output_path,
            dedup,
            input,
        } => convert::run(&input_path, &output_path, dedup, &input.resolve()?),
    }
}

pub(crate) fn load_tag_file(
    path: &Path,
    config: &TagFileConfig,
) -> Result<Vec<TagRef>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let tags = load_tags(BufReader::new(file), config.format, config.language)?;
    info!(
        "Loaded {} {} tags from {}",
        tags.len(),
        config.format,
        path.display()
    );
    Ok(tags)
}
