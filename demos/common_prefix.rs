//! Demonstration driver: builds two independent tries from literal
//! strings and prints the common prefix each one computes.

use trellis::Trie;

fn main() {
    let mut trie_1 = Trie::new();
    trie_1.insert_str("123456");
    trie_1.insert_str("1234");

    println!("common prefix: {}", trie_1.common_prefix_string());

    let mut trie_2 = Trie::new();
    trie_2.insert_str("");
    trie_2.insert_str("xabX");
    trie_2.insert_str("xabXYZ");
    trie_2.insert_str("xabXP");
    trie_2.insert_str("xabXT");

    println!("common prefix: {}", trie_2.common_prefix_string());
}
