use std::collections::BTreeMap;

/// Sparse byte-addressable memory. Addresses that were never written read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage {
    bytes: BTreeMap<u32, u8>,
}

impl MemoryImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn store(&mut self, addr: u32, value: u8) {
        self.bytes.insert(addr, value);
    }

    /// Number of populated bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn byte(&self, addr: u32) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    /// Read `size` bytes starting at `addr`, wrapping at the top of the address space.
    pub fn load(&self, addr: u32, size: u32) -> Vec<u8> {
        (0..size).map(|i| self.byte(addr.wrapping_add(i))).collect()
    }

    /// Little-endian word at `addr`. Never fails.
    pub fn fetch_word(&self, addr: u32) -> u32 {
        let raw = self.load(addr, 4);
        u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])
    }

    pub fn addresses(&self) -> impl Iterator<Item = u32> + '_ {
        self.bytes.keys().copied()
    }

    /// Ascending word-aligned addresses whose word holds at least one populated byte.
    pub fn word_addresses(&self) -> Vec<u32> {
        let mut words: Vec<u32> = self.addresses().map(|addr| addr & !3).collect();
        words.dedup();
        words
    }
}

