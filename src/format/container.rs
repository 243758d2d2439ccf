//! Self-describing compressed container.
//!
//! Layout, all multi-byte integers little-endian:
//!
//! | field                 | size                  |
//! |-----------------------|-----------------------|
//! | magic `HUF0`          | 4 bytes               |
//! | distinct-symbol count | u32                   |
//! | per symbol: value     | u8                    |
//! |             frequency | u32                   |
//! | meaningful bit count  | u64                   |
//! | packed payload        | ceil(bit_count/8)     |
//!
//! The symbol table is written in first-seen order and the tree is rebuilt
//! from it in that same order, so the decoder's tree is bit-for-bit the tree
//! the encoder used. Payload bits are packed MSB-first with a zero-padded
//! final byte.

use crate::engine::codec;
use crate::engine::{codes, frequency::FreqTable, tree};
use crate::format::error::{CompressError, FormatError};
use tracing::debug;

/// Container magic bytes: "HUF0"
pub const MAGIC: [u8; 4] = *b"HUF0";

const SYMBOL_ENTRY_SIZE: usize = 5;

/// One compressed unit, built fully in memory and written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Symbol table in first-seen order.
    pub entries: Vec<(u8, u32)>,
    /// Number of meaningful bits in `payload`.
    pub bit_count: u64,
    /// Bit-packed encoded data, MSB-first, final byte zero-padded.
    pub payload: Vec<u8>,
}

impl Container {
    /// Run the whole compress pipeline: tally, build the tree, generate
    /// codes, encode, pack.
    pub fn compress(input: &[u8]) -> Result<Self, CompressError> {
        let table = FreqTable::count(input)?;
        let root = tree::build(&table);
        let codes = codes::generate(root.as_ref());
        let bits = codec::encode(input, &codes)?;

        debug!(
            symbols = table.len(),
            input_bytes = table.total(),
            encoded_bits = bits.len(),
            "encoded input"
        );

        Ok(Self {
            entries: table.entries().to_vec(),
            bit_count: bits.len() as u64,
            payload: codec::pack_bits(&bits),
        })
    }

    /// Rebuild the tree from the stored table, in stored order, and decode
    /// exactly `bit_count` bits back into the original byte sequence.
    ///
    /// `Container` is a plain public struct, so the payload size is checked
    /// here again even though `from_bytes` never produces a mismatched one.
    pub fn decompress(&self) -> Result<Vec<u8>, FormatError> {
        let expected = Self::payload_size(self.bit_count);
        if self.payload.len() as u64 != expected {
            return Err(FormatError::PayloadSizeMismatch {
                expected,
                actual: self.payload.len() as u64,
            });
        }

        let table = FreqTable::from_entries(self.entries.clone());
        let root = tree::build(&table);
        let bits = codec::unpack_bits(&self.payload, self.bit_count);
        Ok(codec::decode(&bits, root.as_ref()))
    }

    /// Serialize to the on-disk layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            MAGIC.len() + 4 + self.entries.len() * SYMBOL_ENTRY_SIZE + 8 + self.payload.len(),
        );
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&(self.entries.len() as u32).to_le_bytes());
        for &(symbol, freq) in &self.entries {
            out.push(symbol);
            out.extend_from_slice(&freq.to_le_bytes());
        }
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.payload);
        out
    }

    /// Parse the on-disk layout. The magic is checked before anything else;
    /// every malformed shape is a distinct [`FormatError`], never a panic or
    /// a silently truncated result.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, FormatError> {
        if buf.len() < MAGIC.len() {
            return Err(FormatError::Truncated { section: "magic" });
        }
        if buf[..MAGIC.len()] != MAGIC {
            return Err(FormatError::BadMagic);
        }
        let mut offset = MAGIC.len();

        let symbol_count = read_u32(buf, &mut offset, "symbol count")?;
        if symbol_count > 256 {
            return Err(FormatError::SymbolCountOverflow(symbol_count));
        }

        let mut entries = Vec::with_capacity(symbol_count as usize);
        let mut seen = [false; 256];
        for _ in 0..symbol_count {
            if buf.len() < offset + SYMBOL_ENTRY_SIZE {
                return Err(FormatError::Truncated { section: "symbol table" });
            }
            let symbol = buf[offset];
            offset += 1;
            let freq = read_u32(buf, &mut offset, "symbol table")?;

            if seen[symbol as usize] {
                return Err(FormatError::DuplicateSymbol(symbol));
            }
            seen[symbol as usize] = true;
            if freq == 0 {
                return Err(FormatError::ZeroFrequency(symbol));
            }
            entries.push((symbol, freq));
        }

        let bit_count = read_u64(buf, &mut offset, "bit count")?;

        // Compared in u64: a hostile bit count near u64::MAX must fail the
        // size check, not overflow the expected-size arithmetic.
        let expected = Self::payload_size(bit_count);
        let remaining = (buf.len() - offset) as u64;
        if remaining < expected {
            return Err(FormatError::Truncated { section: "payload" });
        }
        if remaining > expected {
            return Err(FormatError::TrailingData((remaining - expected) as usize));
        }
        let payload = buf[offset..].to_vec();

        Ok(Self { entries, bit_count, payload })
    }

    /// Number of distinct symbols in the table.
    pub fn symbol_count(&self) -> usize {
        self.entries.len()
    }

    /// Original (uncompressed) size implied by the frequency table.
    pub fn original_size(&self) -> u64 {
        self.entries.iter().map(|&(_, f)| f as u64).sum()
    }

    fn payload_size(bit_count: u64) -> u64 {
        bit_count / 8 + u64::from(bit_count % 8 != 0)
    }
}

fn read_u32(buf: &[u8], offset: &mut usize, section: &'static str) -> Result<u32, FormatError> {
    let end = *offset + 4;
    let bytes = buf
        .get(*offset..end)
        .ok_or(FormatError::Truncated { section })?;
    *offset = end;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_u64(buf: &[u8], offset: &mut usize, section: &'static str) -> Result<u64, FormatError> {
    let end = *offset + 8;
    let bytes = buf
        .get(*offset..end)
        .ok_or(FormatError::Truncated { section })?;
    *offset = end;
    Ok(u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]))
}
