//! Error types surfaced by the crate.
//!
//! Every operation on [`crate::Trie`] is a total function except streaming
//! ingest, which touches the filesystem and can fail.

/// The only error this crate can produce.
///
/// All other `Trie` operations are total: an absent word is a `false`
/// return, not an error, and an empty-string insert is a silent no-op.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// The input stream could not be opened or read.
    #[error("failed to read input stream: {0}")]
    Io(#[from] std::io::Error),
}
