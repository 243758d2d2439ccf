use crate::engine::tree::HuffmanNode;
use std::collections::HashMap;

/// Walk the tree and emit each leaf's root-to-leaf path: `false` for a left
/// descent, `true` for a right one.
///
/// A tree that is a lone leaf has an empty root path, which would make runs
/// of that symbol indistinguishable from a single occurrence. That symbol
/// gets the 1-bit code `[false]` instead, one bit per occurrence.
pub fn generate(root: Option<&HuffmanNode>) -> HashMap<u8, Vec<bool>> {
    let mut codes = HashMap::new();
    if let Some(root) = root {
        walk(root, Vec::new(), &mut codes);
    }
    codes
}

fn walk(node: &HuffmanNode, path: Vec<bool>, codes: &mut HashMap<u8, Vec<bool>>) {
    if node.is_leaf() {
        if let Some(symbol) = node.symbol {
            let code = if path.is_empty() { vec![false] } else { path };
            codes.insert(symbol, code);
        }
        return;
    }

    if let Some(left) = &node.left {
        let mut left_path = path.clone();
        left_path.push(false);
        walk(left, left_path, codes);
    }
    if let Some(right) = &node.right {
        let mut right_path = path;
        right_path.push(true);
        walk(right, right_path, codes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{frequency::FreqTable, tree};

    fn codes_for(data: &[u8]) -> HashMap<u8, Vec<bool>> {
        let table = FreqTable::count(data).unwrap();
        let root = tree::build(&table);
        generate(root.as_ref())
    }

    #[test]
    fn no_tree_yields_no_codes() {
        assert!(generate(None).is_empty());
    }

    #[test]
    fn lone_symbol_gets_one_bit_code() {
        let codes = codes_for(b"aaaa");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&b'a'], vec![false]);
    }

    #[test]
    fn frequent_symbols_get_codes_no_longer_than_rare_ones() {
        let codes = codes_for(b"abracadabra");
        let a_len = codes[&b'a'].len();
        for (&sym, code) in &codes {
            if sym != b'a' {
                assert!(a_len <= code.len(), "'a' outcoded by {:?}", sym as char);
            }
        }
    }

    #[test]
    fn codes_are_prefix_free() {
        let codes = codes_for(b"the quick brown fox jumps over the lazy dog");
        for (&a, code_a) in &codes {
            for (&b, code_b) in &codes {
                if a != b {
                    assert!(!code_b.starts_with(code_a));
                }
            }
        }
    }
}
