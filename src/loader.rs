// loader.rs
//
// Builds a MemoryImage from a sparse hex dump:
//
//   // comment          # comment
//   @1000               set the write address (hex)
//   13 05 00 00         bytes (hex), written at consecutive addresses

use crate::error::LoadError;
use crate::memory::MemoryImage;
use log::{debug, info};
use std::fs;
use std::path::Path;

pub fn load_hex_file(path: &Path) -> Result<MemoryImage, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let image = parse_hex_dump(&text)?;
    info!("loaded {} bytes from {}", image.len(), path.display());
    Ok(image)
}

/// Parse hex-dump text. Any malformed token fails the whole parse.
pub fn parse_hex_dump(text: &str) -> Result<MemoryImage, LoadError> {
    let mut image = MemoryImage::new();
    let mut addr: u32 = 0;

    for (index, raw_line) in text.lines().enumerate() {
        let line_num = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('@') {
            let token = rest.trim();
            addr = u32::from_str_radix(token, 16).map_err(|_| LoadError::invalid_address(line_num, token))?;
            debug!("line {}: write address 0x{:08x}", line_num, addr);
            continue;
        }

        for token in line.split_whitespace() {
            let value = u8::from_str_radix(token, 16).map_err(|_| LoadError::invalid_byte(line_num, token))?;
            image.store(addr, value);
            addr = addr.wrapping_add(1);
        }
    }

    Ok(image)
}
