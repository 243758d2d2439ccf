use std::collections::HashMap;
use std::fmt;

/// A single byte occurred more often than the container's u32 frequency
/// field can record. The format makes that a hard limit, so the tally fails
/// explicitly instead of wrapping into a zero count the reader would reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOverflow(pub u8);

impl fmt::Display for CountOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "byte 0x{:02x} occurs more than {} times",
            self.0,
            u32::MAX
        )
    }
}

impl std::error::Error for CountOverflow {}

/// Byte-frequency table that remembers the order in which distinct byte
/// values were first observed. That order drives the tie-break during tree
/// construction, so it is part of the table's identity, not an artifact.
#[derive(Debug, Clone, Default)]
pub struct FreqTable {
    entries: Vec<(u8, u32)>,
    index: HashMap<u8, usize>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every byte of `data`, recording first-seen order.
    pub fn count(data: &[u8]) -> Result<Self, CountOverflow> {
        let mut table = Self::new();
        for &byte in data {
            table.bump(byte)?;
        }
        Ok(table)
    }

    /// Rebuild a table from already-counted (symbol, count) pairs, e.g. a
    /// container's symbol table. Pair order becomes the first-seen order.
    /// Callers must have validated counts > 0 and symbol uniqueness.
    pub fn from_entries(entries: Vec<(u8, u32)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, &(byte, _))| (byte, i))
            .collect();
        Self { entries, index }
    }

    fn bump(&mut self, byte: u8) -> Result<(), CountOverflow> {
        match self.index.get(&byte) {
            Some(&i) => {
                let count = &mut self.entries[i].1;
                *count = count.checked_add(1).ok_or(CountOverflow(byte))?;
            }
            None => {
                self.index.insert(byte, self.entries.len());
                self.entries.push((byte, 1));
            }
        }
        Ok(())
    }

    pub fn get(&self, byte: u8) -> Option<u32> {
        self.index.get(&byte).map(|&i| self.entries[i].1)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(u8, u32)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted bytes.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, f)| f as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_preserves_first_seen_order() {
        let table = FreqTable::count(b"abracadabra").unwrap();
        let entries = table.entries();
        assert_eq!(entries[0], (b'a', 5));
        assert_eq!(entries[1], (b'b', 2));
        assert_eq!(entries[2], (b'r', 2));
        assert_eq!(entries[3], (b'c', 1));
        assert_eq!(entries[4], (b'd', 1));
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = FreqTable::count(b"").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn from_entries_round_trips_order() {
        let table = FreqTable::count(b"hello world").unwrap();
        let rebuilt = FreqTable::from_entries(table.entries().to_vec());
        assert_eq!(table.entries(), rebuilt.entries());
        assert_eq!(rebuilt.get(b'l'), Some(3));
        assert_eq!(rebuilt.get(b'z'), None);
    }

    #[test]
    fn count_past_u32_max_is_an_explicit_error() {
        // A real 4 GiB input is impractical here; saturate the counter
        // directly and bump once more.
        let mut table = FreqTable::from_entries(vec![(b'a', u32::MAX)]);
        assert_eq!(table.bump(b'a'), Err(CountOverflow(b'a')));
        // A different byte is still countable.
        assert_eq!(table.bump(b'b'), Ok(()));
    }
}
