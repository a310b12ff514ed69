// config.rs
//
// Command-line configuration for the rvdis disassembler

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

/// When to style the listing with terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Disassemble RV32I words from a sparse hex dump
#[derive(Parser, Debug)]
#[command(name = "rvdis", version, about, long_about = None)]
#[command(after_help = "ADDR_SPEC forms (hex addresses, optional 0x prefix):
    ADDR          a single word
    START..END    every word from START up to END (exclusive)
    START+COUNT   COUNT words from START (COUNT is decimal)

With no ADDR_SPEC, every word that holds loaded data is listed.
Repeated addresses are printed once.")]
pub struct Config {
    /// Hex dump to load
    pub hex_file: PathBuf,

    /// Addresses to disassemble
    #[arg(value_name = "ADDR_SPEC")]
    pub addresses: Vec<String>,

    /// Show more log output on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Style mnemonics with color
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn use_color(&self) -> bool {
        match self.color {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => io::stdout().is_tty(),
        }
    }
}
