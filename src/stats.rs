use crate::format::Container;
use serde::Serialize;

/// Summary of one compression run, printable after `compress` and emitted as
/// JSON by `inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionStats {
    pub original_bytes: u64,
    pub container_bytes: u64,
    pub distinct_symbols: usize,
    pub encoded_bits: u64,
}

impl CompressionStats {
    pub fn from_container(container: &Container, container_bytes: u64) -> Self {
        Self {
            original_bytes: container.original_size(),
            container_bytes,
            distinct_symbols: container.symbol_count(),
            encoded_bits: container.bit_count,
        }
    }

    pub fn original_bits(&self) -> u64 {
        self.original_bytes * 8
    }

    /// Space saved by the encoded payload relative to the raw input,
    /// ignoring container overhead. Zero for an empty input.
    pub fn payload_savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.encoded_bits as f64 / self.original_bits() as f64) * 100.0
    }

    /// Whole-file ratio including the header and symbol table.
    pub fn container_ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.container_bytes as f64 / self.original_bytes as f64
    }
}
