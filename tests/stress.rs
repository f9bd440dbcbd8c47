use growable_bloom_filter::GrowableBloom;
use peak_alloc::PeakAlloc;
use radix_trie_core::Trie;
use randomizer::Randomizer;
use std::collections::HashMap;
use std::time::Instant;

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

struct BigData {
    number_of_words: usize,
    first_byte_histogram: HashMap<u8, usize>,
    words: Vec<Vec<u8>>,
}

fn generate_random_words(count: usize, length: usize) -> BigData {
    let mut bloom_filter = GrowableBloom::new(0.01, count);
    let mut words = Vec::new();
    let mut first_byte_histogram = HashMap::new();
    let mut number_of_words = 0;

    for _ in 0..count {
        let random_string = Randomizer::ALPHABETICAL_LOWER(length).string().unwrap();
        if !bloom_filter.contains(&random_string) {
            bloom_filter.insert(&random_string);

            let bytes = random_string.into_bytes();
            *first_byte_histogram.entry(bytes[0]).or_insert(0) += 1;

            words.push(bytes);
            number_of_words += 1;
        }
    }

    BigData {
        number_of_words,
        first_byte_histogram,
        words,
    }
}

#[test]
fn overall_stress() {
    let word_count = 50_000;
    let word_length = 15;

    let big_data = generate_random_words(word_count, word_length);

    println!(
        "Memory usage before trie generation: {:.1}mb",
        PEAK_ALLOC.current_usage_as_mb()
    );

    let mut trie = Trie::new();
    for word in &big_data.words {
        trie.insert(word);
    }

    println!(
        "Memory usage after trie generation: {:.1}mb",
        PEAK_ALLOC.current_usage_as_mb()
    );

    let now = Instant::now();

    assert_eq!(trie.size(), big_data.number_of_words);

    let metrics = trie.word_metrics();
    assert_eq!(metrics.min, word_length);
    assert_eq!(metrics.max, word_length);

    for (first_byte, count) in big_data.first_byte_histogram.iter() {
        let found = trie.words_with_prefix(&[*first_byte]);
        assert_eq!(found.len(), *count);
    }

    let memory = trie.memory_stats();
    assert!(memory.total_bytes > 0);
    assert!(memory.node_count >= big_data.number_of_words);

    let elapsed = now.elapsed();
    println!("Query time over {word_count} words: {elapsed:.2?}");
}

#[test]
fn removing_every_word_empties_the_trie() {
    let big_data = generate_random_words(20_000, 12);

    let mut trie = Trie::new();
    for word in &big_data.words {
        trie.insert(word);
    }
    assert_eq!(trie.size(), big_data.number_of_words);

    for word in &big_data.words {
        assert!(trie.remove(word));
    }

    assert!(trie.is_empty());
    assert_eq!(trie.size(), 0);
    assert!(trie.all_words().is_empty());

    let memory = trie.memory_stats();
    assert_eq!(memory.node_count, 1);
    assert_eq!(memory.string_bytes, 0);
}
