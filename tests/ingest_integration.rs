use radix_trie_core::{IngestConfig, Trie};
use std::io::Write;

#[test]
fn bulk_insert_from_stream_reads_a_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha").unwrap();
    writeln!(file, "beta").unwrap();
    write!(file, "\r\ngamma\r\n\n  delta  \n").unwrap();
    file.flush().unwrap();

    let mut trie = Trie::new();
    let inserted = trie.bulk_insert_from_stream(file.path(), 8).unwrap();

    assert_eq!(inserted, 4);
    let mut words = trie.all_words();
    words.sort();
    assert_eq!(
        words,
        vec![
            b"alpha".to_vec(),
            b"beta".to_vec(),
            b"delta".to_vec(),
            b"gamma".to_vec(),
        ]
    );
}

#[test]
fn bulk_insert_from_stream_on_missing_path_is_an_error() {
    let mut trie = Trie::new();
    let result = trie.bulk_insert_from_stream("/nonexistent/path/for/this/test", 64);
    assert!(result.is_err());
}

#[test]
fn ingest_is_insensitive_to_buffer_size() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let body: String = (0..200)
        .map(|i| format!("word-{i}\n"))
        .collect::<Vec<_>>()
        .join("");
    write!(file, "{body}").unwrap();
    file.flush().unwrap();

    let mut reference = Trie::new();
    reference
        .bulk_insert_from_stream(file.path(), DEFAULT_BUFFER_SIZE)
        .unwrap();

    for buffer_size in [1usize, 3, 7, 64] {
        let mut candidate = Trie::new();
        candidate
            .bulk_insert_from_stream(file.path(), buffer_size)
            .unwrap();
        assert_eq!(candidate, reference, "mismatch at buffer_size={buffer_size}");
    }
}

const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

#[test]
fn ingest_config_default_matches_documented_size() {
    assert_eq!(IngestConfig::default().buffer_size, DEFAULT_BUFFER_SIZE);
}
