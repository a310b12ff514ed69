// selection.rs
//
// Turns command-line address specs into an ordered list of word addresses.
//
//   ADDR          a single address
//   START..END    every word from START up to (not including) END
//   START+COUNT   COUNT words starting at START (COUNT is decimal)
//
// Addresses are hex, with or without a 0x prefix. A single spec may cover at
// most MAX_SPEC_WORDS words.

use crate::error::SelectionError;
use std::collections::HashSet;

const WORD_SIZE: u32 = 4;

pub const MAX_SPEC_WORDS: u32 = 0x10000;

/// Addresses in request order with repeats dropped.
#[derive(Debug, Clone, Default)]
pub struct AddressList {
    order: Vec<u32>,
    seen: HashSet<u32>,
}

impl AddressList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the address was already present.
    pub fn push(&mut self, addr: u32) -> bool {
        if !self.seen.insert(addr) {
            return false;
        }
        self.order.push(addr);
        true
    }

    pub fn extend_from_spec(&mut self, spec: &str) -> Result<(), SelectionError> {
        for addr in parse_address_spec(spec)? {
            self.push(addr);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }
}

impl FromIterator<u32> for AddressList {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut list = AddressList::new();
        for addr in iter {
            list.push(addr);
        }
        list
    }
}

/// Build an address list from every spec in order.
pub fn select<S: AsRef<str>>(specs: &[S]) -> Result<AddressList, SelectionError> {
    let mut list = AddressList::new();
    for spec in specs {
        list.extend_from_spec(spec.as_ref())?;
    }
    Ok(list)
}

pub fn parse_address_spec(spec: &str) -> Result<Vec<u32>, SelectionError> {
    let spec = spec.trim();

    if let Some((start, end)) = spec.split_once("..") {
        let start = parse_hex(spec, start)?;
        let end = parse_hex(spec, end)?;
        if end < start {
            return Err(SelectionError::ReversedRange { spec: spec.to_string() });
        }
        check_size(spec, (end - start).div_ceil(WORD_SIZE))?;
        return Ok((start..end).step_by(WORD_SIZE as usize).collect());
    }

    if let Some((start, count)) = spec.split_once('+') {
        let start = parse_hex(spec, start)?;
        let count: u32 = count
            .trim()
            .parse()
            .map_err(|_| SelectionError::InvalidNumber { spec: spec.to_string(), token: count.to_string() })?;
        check_size(spec, count)?;
        if count > 0 {
            let last = (count - 1).checked_mul(WORD_SIZE).and_then(|bytes| start.checked_add(bytes));
            if last.is_none() {
                return Err(SelectionError::Overflow { spec: spec.to_string() });
            }
        }
        return Ok((0..count).map(|i| start + i * WORD_SIZE).collect());
    }

    Ok(vec![parse_hex(spec, spec)?])
}

fn check_size(spec: &str, words: u32) -> Result<(), SelectionError> {
    if words > MAX_SPEC_WORDS {
        return Err(SelectionError::TooLarge { spec: spec.to_string(), words, limit: MAX_SPEC_WORDS });
    }
    Ok(())
}

fn parse_hex(spec: &str, token: &str) -> Result<u32, SelectionError> {
    let token = token.trim();
    let digits = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")).unwrap_or(token);
    u32::from_str_radix(digits, 16)
        .map_err(|_| SelectionError::InvalidNumber { spec: spec.to_string(), token: token.to_string() })
}
