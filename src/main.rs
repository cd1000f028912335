use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quemap_fu::config::DEFAULT_ITEM_OFFSET;
use quemap_fu::{ConvertConfig, Converter, Document, FlamePolicy, Writes};

/// Convert a Quake map and its rtlights into a Quetoo map on stdout.
#[derive(Parser)]
#[command(name = "quemap-fu", version)]
struct Cli {
    /// Quake .map file
    map: PathBuf,

    /// Lights file (default: the map path with an .rtlights extension)
    lights: Option<PathBuf>,

    /// Drop torches and large flames instead of converting them to misc_flame
    #[arg(long)]
    drop_flames: bool,

    /// Vertical offset added to item and weapon origins
    #[arg(
        long,
        default_value_t = DEFAULT_ITEM_OFFSET,
        allow_negative_numbers = true
    )]
    item_offset: f64,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        ConvertConfig {
            flames: if self.drop_flames {
                FlamePolicy::Drop
            } else {
                FlamePolicy::Convert
            },
            item_offset: self.item_offset,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let converter = Converter::new(cli.config());

    let mut document = Document::new(&cli.map, cli.lights.clone());
    document
        .read()
        .with_context(|| format!("Failed to load `{}`", cli.map.display()))?;

    let converted = document.convert(&converter);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    converted.write_to(&mut writer)?;
    writer.flush()?;

    Ok(())
}
