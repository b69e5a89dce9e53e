//! Edge case tests for Huffman compression.

use oxihuff_codec::{ByteOrder, CodeTable, OxiHuffError, compress, decompress};

#[test]
fn test_empty_input() {
    let input = b"";
    let (compressed, table) = compress(input).unwrap();
    assert!(compressed.is_empty());

    let parsed = CodeTable::from_bytes(&table, ByteOrder::Native).unwrap();
    assert_eq!(parsed.alphabet_size(), 0);

    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_single_byte() {
    let input = b"A";
    let (compressed, table) = compress(input).unwrap();
    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_all_zeros() {
    let input = vec![0u8; 1000];
    let (compressed, table) = compress(&input).unwrap();
    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
    // One bit per symbol
    assert_eq!(compressed.len(), input.len() / 8);
}

#[test]
fn test_skewed_frequencies() {
    // Fibonacci weights produce the deepest possible tree.
    let mut input = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u8 {
        input.extend(std::iter::repeat_n(symbol, a));
        (a, b) = (b, a + b);
    }
    let (compressed, table) = compress(&input).unwrap();

    let parsed = CodeTable::from_bytes(&table, ByteOrder::Native).unwrap();
    assert_eq!(parsed.max_code_len(), 19);

    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_alternating_pattern() {
    let mut input = Vec::with_capacity(2000);
    for i in 0..1000 {
        input.push(if i % 2 == 0 { b'A' } else { b'B' });
    }

    let (compressed, table) = compress(&input).unwrap();
    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_binary_data() {
    let mut input = Vec::with_capacity(64 * 1024);
    let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
    while input.len() < 64 * 1024 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        input.push((seed >> 56) as u8);
    }

    let (compressed, table) = compress(&input).unwrap();
    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_large_input() {
    // 1MB of text
    let mut input = Vec::with_capacity(1024 * 1024);
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    while input.len() < 1024 * 1024 {
        input.extend_from_slice(pattern);
    }
    input.truncate(1024 * 1024);

    let (compressed, table) = compress(&input).unwrap();
    let decompressed = decompress(&compressed, &table).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn test_table_from_other_input() {
    // A table for "aab" expects three symbols; an empty stream has none.
    let (_, table) = compress(b"aab").unwrap();
    let (compressed, _) = compress(b"").unwrap();
    let err = decompress(&compressed, &table).unwrap_err();
    assert!(matches!(err, OxiHuffError::CorruptStream { .. }));
}

#[test]
fn test_table_garbage() {
    let err = decompress(&[0xFF], b"not a table").unwrap_err();
    assert!(err.is_corruption());
}
