use crate::engine::tree::HuffmanNode;
use std::collections::HashMap;
use std::fmt;

/// Encode-time failure. Every input byte must have been counted during
/// frequency analysis of the same input, so hitting this in the compress
/// pipeline means a broken caller, not bad data. It is surfaced as an error
/// instead of a panic so the contract is visible at the call site.
#[derive(Debug, PartialEq, Eq)]
pub enum EncodeError {
    UnknownSymbol(u8),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownSymbol(byte) =>
                write!(f, "no code for byte 0x{:02x}", byte),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode `data` into a logical bit sequence, strictly in input order.
pub fn encode(data: &[u8], codes: &HashMap<u8, Vec<bool>>) -> Result<Vec<bool>, EncodeError> {
    let mut bits = Vec::new();
    for &byte in data {
        let code = codes.get(&byte).ok_or(EncodeError::UnknownSymbol(byte))?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Decode a logical bit sequence by walking the tree: left on `false`, right
/// on `true`, emit and reset at each leaf. A trailing partial path is
/// discarded; the container's exact bit count keeps that from ever cutting a
/// symbol short in practice.
pub fn decode(bits: &[bool], root: Option<&HuffmanNode>) -> Vec<u8> {
    let Some(root) = root else {
        return Vec::new();
    };

    // Lone-leaf tree: the 1-bit degenerate code, one symbol per bit.
    if let Some(symbol) = root.symbol {
        return vec![symbol; bits.len()];
    }

    let mut out = Vec::new();
    let mut current = root;

    for &bit in bits {
        let next = if bit {
            current.right.as_deref()
        } else {
            current.left.as_deref()
        };
        let Some(next) = next else {
            // Malformed path for this tree; stop rather than guess.
            break;
        };
        current = next;

        if let Some(symbol) = current.symbol {
            out.push(symbol);
            current = root;
        }
    }

    out
}

/// Pack logical bits into bytes, most significant bit first, zero-padding
/// the final byte. This convention is part of the container's external
/// contract; the unpacker must mirror it exactly.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; (bits.len() + 7) / 8];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    bytes
}

/// Unpack exactly `bit_count` bits MSB-first, ignoring any padding bits in
/// the final byte. Callers guarantee `bytes` holds at least `bit_count` bits.
pub fn unpack_bits(bytes: &[u8], bit_count: u64) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bit_count as usize);
    for i in 0..bit_count {
        let byte = bytes[(i / 8) as usize];
        bits.push(byte & (1 << (7 - (i % 8))) != 0);
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{codes, frequency::FreqTable, tree};

    fn pipeline(data: &[u8]) -> (Option<HuffmanNode>, HashMap<u8, Vec<bool>>) {
        let table = FreqTable::count(data).unwrap();
        let root = tree::build(&table);
        let codes = codes::generate(root.as_ref());
        (root, codes)
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let data = b"abracadabra";
        let (root, codes) = pipeline(data);
        let bits = encode(data, &codes).unwrap();
        assert_eq!(decode(&bits, root.as_ref()), data);
    }

    #[test]
    fn encoded_length_is_sum_of_code_lengths() {
        let data = b"abracadabra";
        let (_, codes) = pipeline(data);
        let bits = encode(data, &codes).unwrap();
        let expected: usize = data.iter().map(|b| codes[b].len()).sum();
        assert_eq!(bits.len(), expected);
    }

    #[test]
    fn missing_code_is_an_unknown_symbol_error() {
        let (_, codes) = pipeline(b"aabb");
        assert_eq!(encode(b"aaxb", &codes), Err(EncodeError::UnknownSymbol(b'x')));
    }

    #[test]
    fn decode_without_tree_is_empty() {
        assert!(decode(&[true, false, true], None).is_empty());
    }

    #[test]
    fn decode_discards_trailing_partial_path() {
        let data = b"abracadabra";
        let (root, codes) = pipeline(data);
        let mut bits = encode(data, &codes).unwrap();
        // 'a' sits alone under the root's left branch, so a single right
        // step stops on an internal node and must be dropped.
        bits.push(true);
        assert_eq!(decode(&bits, root.as_ref()), data);
    }

    #[test]
    fn lone_leaf_decodes_one_symbol_per_bit() {
        let (root, codes) = pipeline(b"zzz");
        let bits = encode(b"zzz", &codes).unwrap();
        assert_eq!(bits.len(), 3);
        assert_eq!(decode(&bits, root.as_ref()), b"zzz");
    }

    #[test]
    fn packing_is_msb_first_with_zero_padding() {
        let bits = [true, false, true, true, false, false, true, false, true, true];
        let bytes = pack_bits(&bits);
        assert_eq!(bytes, vec![0b1011_0010, 0b1100_0000]);
        assert_eq!(unpack_bits(&bytes, 10), bits);
    }

    #[test]
    fn empty_bits_pack_to_no_bytes() {
        assert!(pack_bits(&[]).is_empty());
        assert!(unpack_bits(&[], 0).is_empty());
    }
}
