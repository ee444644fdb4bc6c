//! Tokenizer, inverted index and flat-file persistence for the layer keyword index.

pub mod config;
pub mod error;
pub mod index;
pub mod persist;
pub mod record;
pub mod tokenizer;

pub use config::IndexerConfig;
pub use error::{ErrorKind, IndexError, Result};
pub use index::{build_index, IndexStats, InvertedIndex, Position, TermId};
pub use record::Record;
