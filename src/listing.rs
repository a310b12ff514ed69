use crate::memory::MemoryImage;
use crate::riscv::Op;
use crate::selection::AddressList;
use crossterm::style::Stylize;
use log::{debug, info};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStyle {
    /// Style mnemonics with terminal escapes.
    pub color: bool,
}

/// One listing line: `<address>: <word>  <disassembly>`.
pub fn render_line(addr: u32, word: u32) -> String {
    render_op(addr, word, &Op::new(word), ListingStyle::default())
}

fn render_op(addr: u32, word: u32, op: &Op, style: ListingStyle) -> String {
    let text = op.to_string();
    if !style.color {
        return format!("{:08x}: {:08x}  {}", addr, word, text);
    }
    let styled = if op.is_known() { text.as_str().bold() } else { text.as_str().dark_grey() };
    format!("{:08x}: {:08x}  {}", addr, word, styled)
}

/// Write one line per address in list order. Returns the number of lines written.
pub fn write_listing<W: Write>(
    image: &MemoryImage,
    addresses: &AddressList,
    out: &mut W,
    style: ListingStyle,
) -> io::Result<usize> {
    let mut lines = 0;
    let mut undecoded = 0;

    for addr in addresses.iter() {
        let word = image.fetch_word(addr);
        let op = Op::new(word);
        if !op.is_known() {
            debug!("0x{:08x}: no RV32I decoding for 0x{:08x}", addr, word);
            undecoded += 1;
        }
        writeln!(out, "{}", render_op(addr, word, &op, style))?;
        lines += 1;
    }

    info!("listed {} words, {} without a known decoding", lines, undecoded);
    Ok(lines)
}
