//! Configuration for streaming ingest.

/// Default chunk size used by [`crate::Trie::bulk_insert_from_stream`] when
/// the caller does not ask for anything else: 1 MiB.
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Tuning knobs for chunked stream ingest.
///
/// # Examples
///
/// ```
/// use radix_trie_core::IngestConfig;
///
/// let default_config = IngestConfig::default();
/// assert_eq!(default_config.buffer_size, 1024 * 1024);
///
/// let small = IngestConfig::new(16);
/// assert_eq!(small.buffer_size, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct IngestConfig {
    /// Size, in bytes, of each chunk read from the input stream. A value of
    /// zero is clamped up to one: the core accepts any positive size, and
    /// zero is the one size that would never make progress.
    pub buffer_size: usize,
}

impl IngestConfig {
    /// Builds a config with the given buffer size, clamped to at least one
    /// byte.
    pub fn new(buffer_size: usize) -> Self {
        IngestConfig {
            buffer_size: buffer_size.max(1),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
