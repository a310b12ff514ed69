pub mod config;
pub mod decoder;
pub mod error;
pub mod listing;
pub mod loader;
pub mod memory;
pub mod riscv;
pub mod selection;

pub use riscv::disassemble;

#[cfg(test)]
mod listing_tests;
