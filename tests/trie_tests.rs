use trellis::Trie;

#[test]
fn test_common_prefix_of_empty_trie_is_empty() {
    let trie: Trie<char> = Trie::new();
    assert_eq!(trie.common_prefix_string(), "");
    assert!(trie.is_empty());
}

#[test]
fn test_common_prefix_of_single_sequence_is_the_sequence() {
    let mut trie = Trie::new();
    trie.insert_str("abc");

    // With one sequence the walk runs through single-child nodes and
    // stops at the terminal leaf, yielding the whole sequence.
    assert_eq!(trie.common_prefix_string(), "abc");
}

#[test]
fn test_common_prefix_bounded_by_shorter_sequence() {
    let mut trie = Trie::new();
    trie.insert_str("123456");
    trie.insert_str("1234");

    assert_eq!(trie.common_prefix_string(), "1234");
}

#[test]
fn test_common_prefix_ignores_empty_insert() {
    let mut trie = Trie::new();
    trie.insert_str("");
    trie.insert_str("xabX");
    trie.insert_str("xabXYZ");
    trie.insert_str("xabXP");
    trie.insert_str("xabXT");

    assert_eq!(trie.common_prefix_string(), "xabX");
    assert_eq!(trie.len(), 4);
}

#[test]
fn test_common_prefix_stops_where_sequences_diverge() {
    let mut trie = Trie::new();
    trie.insert_str("cat");
    trie.insert_str("car");
    trie.insert_str("cart");

    assert_eq!(trie.common_prefix_string(), "ca");
}

#[test]
fn test_common_prefix_empty_when_first_symbols_differ() {
    let mut trie = Trie::new();
    trie.insert_str("alpha");
    trie.insert_str("beta");

    assert_eq!(trie.common_prefix_string(), "");
}

#[test]
fn test_common_prefix_is_prefix_of_every_member() {
    let words = ["intern", "internal", "interval", "interleave", "inter"];
    let mut trie = Trie::new();
    for word in words {
        trie.insert_str(word);
    }

    let prefix = trie.common_prefix_string();
    assert_eq!(prefix, "inter");
    for word in words {
        assert!(word.starts_with(&prefix));
    }
}

#[test]
fn test_repeated_insert_does_not_change_common_prefix() {
    let mut trie = Trie::new();
    trie.insert_str("flow");
    trie.insert_str("flower");

    let before = trie.common_prefix_string();
    trie.insert_str("flow");
    trie.insert_str("flower");
    assert_eq!(trie.common_prefix_string(), before);
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_long_sequence_does_not_overflow_stack() {
    // Insertion and the prefix walk are iterative, so depth is bounded
    // by heap, not stack.
    let long: String = "a".repeat(1_000_000);
    let mut trie = Trie::new();
    trie.insert_str(&long);

    assert!(trie.contains_str(&long));
    assert_eq!(trie.common_prefix_string(), long);
}

#[test]
fn test_trie_over_byte_symbols() {
    let mut trie = Trie::new();
    trie.insert(*b"ripple");
    trie.insert(*b"ripcord");

    assert_eq!(trie.common_prefix(), b"rip".to_vec());
    assert!(trie.contains(*b"ripple"));
    assert!(!trie.contains(*b"rip"));
}
