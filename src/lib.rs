//! # radix_trie_core
//!
//! A compressed (PATRICIA-style) radix trie over byte strings.
//!
//! Unlike a plain per-character trie, an edge can carry a whole run of
//! bytes instead of just one, so a chain of single-child nodes never
//! accumulates: [`Trie::insert`] and [`Trie::remove`] keep the tree
//! maximally compressed as they go.
//!
//! ## Features
//! - exact membership and prefix queries (`search`, `starts_with`)
//! - full prefix enumeration (`words_with_prefix`, `all_words`)
//! - glob-style wildcard search with `*` and `?` (`pattern_search`)
//! - structural and memory analytics (`height_stats`, `memory_stats`, `word_metrics`)
//! - streaming, line-delimited bulk ingest from a file or any [`std::io::Read`]
//!
//! ## Optional features
//! - `serde`: derives `Serialize`/`Deserialize` on the analytics structs and
//!   [`config::IngestConfig`]
//!
//! ## Dependencies
//! - thiserror, for the [`error::TrieError`] type
//! - serde (optional), for analytics/config (de)serialization
//!
//! ## License
//!
//! The software is licensed under the MIT license.

mod config;
mod error;
mod node;
mod trie;

pub use config::IngestConfig;
pub use error::TrieError;
pub use trie::{HeightStats, MemoryStats, Trie, WordMetrics};
