use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, warn};
use rvdis::config::Config;
use rvdis::listing::{self, ListingStyle};
use rvdis::loader;
use rvdis::selection::{self, AddressList};
use std::io::{self, BufWriter, Write};

fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    // Malformed specs are reported before the image is loaded so no output is produced.
    let requested = selection::select(&config.addresses).context("invalid address selection")?;

    let image =
        loader::load_hex_file(&config.hex_file).map_err(|e| anyhow!(e.with_file_context(&config.hex_file)))?;

    let addresses = if config.addresses.is_empty() {
        debug!("no addresses given, listing every populated word");
        image.word_addresses().into_iter().collect::<AddressList>()
    } else {
        requested
    };
    if image.is_empty() {
        warn!("{} holds no data; every word reads as zero", config.hex_file.display());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let style = ListingStyle { color: config.use_color() };
    listing::write_listing(&image, &addresses, &mut out, style).context("failed to write listing")?;
    out.flush().context("failed to write listing")?;
    Ok(())
}
